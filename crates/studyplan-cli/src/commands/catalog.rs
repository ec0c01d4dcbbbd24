use clap::Subcommand;
use studyplan_core::{Catalog, CustomCourses};

#[derive(Subcommand)]
pub enum CatalogAction {
    /// List subjects and courses
    List {
        /// Only this subject
        #[arg(long)]
        subject: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Resolve a course identifier to its display name
    Resolve {
        /// Identifier such as "math-algebra"
        id: String,
        /// Custom course name as subject=name (repeatable)
        #[arg(long = "custom", value_parser = parse_custom)]
        custom: Vec<(String, String)>,
    },
}

fn parse_custom(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .map(|(s, n)| (s.trim().to_string(), n.trim().to_string()))
        .ok_or_else(|| format!("expected subject=name, got '{raw}'"))
}

pub fn run(action: CatalogAction) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = Catalog::new();
    match action {
        CatalogAction::List { subject, json } => {
            let subjects: Vec<_> = catalog
                .subjects()
                .iter()
                .filter(|s| subject.as_deref().map_or(true, |want| s.id == want))
                .collect();

            if let Some(want) = &subject {
                if subjects.is_empty() {
                    return Err(format!("unknown subject: {want}").into());
                }
            }

            if json {
                println!("{}", serde_json::to_string_pretty(&subjects)?);
            } else {
                println!("catalog v{}", catalog.version());
                for s in subjects {
                    println!("{} ({})", s.label, s.id);
                    for c in s.courses {
                        println!("  {}-{:<14} {}", s.id, c.id, c.label);
                    }
                }
            }
        }
        CatalogAction::Resolve { id, custom } => {
            let custom: CustomCourses = custom.into_iter().collect();
            println!("{}", catalog.resolve(&id, &custom));
        }
    }
    Ok(())
}

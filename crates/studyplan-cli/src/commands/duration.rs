use clap::Args;
use studyplan_core::{calculate_optimal_duration, LearningStyle};

#[derive(Args)]
pub struct DurationArgs {
    /// Course identifier, e.g. "math-calculus"
    course: String,
    /// Base session length in minutes
    #[arg(long, default_value_t = 60)]
    base: u32,
    /// Learning style (visual, auditory, reading, kinesthetic)
    #[arg(long)]
    style: Option<String>,
}

pub fn run(args: DurationArgs) -> Result<(), Box<dyn std::error::Error>> {
    let style = match args.style.as_deref() {
        Some(raw) => Some(
            LearningStyle::parse(raw).ok_or_else(|| format!("unknown learning style: {raw}"))?,
        ),
        None => None,
    };

    println!("{}", calculate_optimal_duration(args.base, &args.course, style));
    Ok(())
}

use std::sync::Arc;

use clap::{Args, Subcommand};
use showroom::feedback::average_rating;
use showroom_app::{
    domain::feedback::{PgFeedbackService, records::FeedbackRecord},
    flows::{FeedbackFlow, feedback::DEFAULT_TOP_LIMIT},
};

#[derive(Debug, Args)]
pub(crate) struct FeedbackCommand {
    #[command(subcommand)]
    command: FeedbackSubcommand,
}

#[derive(Debug, Subcommand)]
enum FeedbackSubcommand {
    /// List every testimonial, newest first
    List,

    /// Show the highest-rated testimonials
    Top {
        /// Maximum number of testimonials
        #[arg(long, default_value_t = DEFAULT_TOP_LIMIT)]
        limit: u32,
    },
}

pub(crate) async fn run(command: FeedbackCommand, service: PgFeedbackService) -> Result<(), String> {
    let flow = FeedbackFlow::new(Arc::new(service));

    let feedback = match command.command {
        FeedbackSubcommand::List => flow.recent().await,
        FeedbackSubcommand::Top { limit } => flow.top(limit).await,
    }
    .map_err(|error| format!("failed to load feedback: {error}"))?;

    if feedback.is_empty() {
        println!("no feedback found");
        return Ok(());
    }

    for entry in &feedback {
        print_feedback(entry);
        println!();
    }

    if let Some(average) = average_rating(&feedback) {
        println!("average_rating: {average:.1}");
    }

    Ok(())
}

fn print_feedback(feedback: &FeedbackRecord) {
    println!("feedback_uuid: {}", feedback.uuid);
    println!("created_at: {}", feedback.created_at);
    println!("from: {} <{}>, {}", feedback.name, feedback.email, feedback.location);
    println!("role: {}", feedback.role);
    println!("rating: {}", feedback.rating.get());
    println!("purchased: {}", feedback.purchased_items.join(", "));
    println!("feedback: {}", feedback.feedback_text);
}

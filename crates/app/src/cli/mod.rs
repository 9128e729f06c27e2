use clap::{Parser, Subcommand};
use showroom_app::{
    database::{self, Db},
    domain::{contacts::PgContactsService, feedback::PgFeedbackService, orders::PgOrdersService},
};

mod contacts;
mod feedback;
mod orders;

#[derive(Debug, Parser)]
#[command(name = "showroom-admin", about = "Showroom administration CLI", long_about = None)]
pub(crate) struct Cli {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true, global = true)]
    database_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Orders(orders::OrdersCommand),
    Feedback(feedback::FeedbackCommand),
    Contacts(contacts::ContactsCommand),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        let url = self
            .database_url
            .ok_or_else(|| "DATABASE_URL is required".to_string())?;

        let pool = database::connect(&url)
            .await
            .map_err(|error| format!("failed to connect to database: {error}"))?;

        let db = Db::new(pool);

        match self.command {
            Commands::Orders(command) => orders::run(command, PgOrdersService::new(db)).await,
            Commands::Feedback(command) => {
                feedback::run(command, PgFeedbackService::new(db)).await
            }
            Commands::Contacts(command) => contacts::run(command, PgContactsService::new(db)).await,
        }
    }
}

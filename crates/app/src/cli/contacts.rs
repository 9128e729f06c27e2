use clap::{Args, Subcommand};
use showroom_app::domain::contacts::{ContactsService, PgContactsService};

#[derive(Debug, Args)]
pub(crate) struct ContactsCommand {
    #[command(subcommand)]
    command: ContactsSubcommand,
}

#[derive(Debug, Subcommand)]
enum ContactsSubcommand {
    /// List contact form messages, newest first
    List,
}

pub(crate) async fn run(command: ContactsCommand, service: PgContactsService) -> Result<(), String> {
    match command.command {
        ContactsSubcommand::List => {
            let contacts = service
                .list_contacts()
                .await
                .map_err(|error| format!("failed to list contact messages: {error}"))?;

            if contacts.is_empty() {
                println!("no contact messages found");
                return Ok(());
            }

            for contact in contacts {
                println!("contact_uuid: {}", contact.uuid);
                println!("created_at: {}", contact.created_at);
                println!("from: {} <{}>", contact.name, contact.email);

                if !contact.subject.is_empty() {
                    println!("subject: {}", contact.subject);
                }

                println!("{}", contact.message);
                println!();
            }
        }
    }

    Ok(())
}

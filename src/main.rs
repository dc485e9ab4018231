//! Phone Directory - console entry point
//!
//! A thin harness over [`ContactDirectory`]: it parses the command line,
//! calls the directory and prints the result. It holds no state of its own.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use phone_directory::domain::birth_date;
use phone_directory::{BirthDate, Config, Contact, ContactDirectory};
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "phone-directory")]
#[command(about = "Personal contact directory backed by a flat text file", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Directory file (overrides PHONE_DIRECTORY_FILE)
    #[arg(short, long, global = true)]
    file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List all contacts
    #[command(alias = "ls")]
    List {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Add a contact
    Add {
        #[arg(long)]
        last_name: String,

        #[arg(long)]
        first_name: String,

        #[arg(long, default_value = "")]
        middle_name: String,

        /// Birth date as DD.MM.YYYY
        #[arg(long)]
        birth_date: String,

        #[arg(long, default_value = "")]
        address: String,

        #[arg(long, default_value = "")]
        email: String,

        /// Phone number, may be repeated
        #[arg(long = "phone")]
        phones: Vec<String>,
    },

    /// Remove a contact by its number in `list`
    #[command(alias = "rm")]
    Remove { number: usize },

    /// Change fields of a contact by its number in `list`
    Edit {
        number: usize,

        #[arg(long)]
        last_name: Option<String>,

        #[arg(long)]
        first_name: Option<String>,

        #[arg(long)]
        middle_name: Option<String>,

        /// Birth date as DD.MM.YYYY
        #[arg(long)]
        birth_date: Option<String>,

        #[arg(long)]
        address: Option<String>,

        #[arg(long)]
        email: Option<String>,

        /// Replace all phone numbers, may be repeated
        #[arg(long = "phone")]
        phones: Vec<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::from_env()?;

    // Logs go to stderr so listings on stdout stay clean
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let path = cli.file.unwrap_or(config.contacts_file);
    info!("Using contact file {}", path.display());

    let mut directory = ContactDirectory::open_file(&path)
        .with_context(|| format!("Failed to open contact file {}", path.display()))?;

    match cli.command {
        Commands::List { json } => print_contacts(&directory, json)?,
        Commands::Add {
            last_name,
            first_name,
            middle_name,
            birth_date,
            address,
            email,
            phones,
        } => {
            let birth_date = parse_birth_date(&birth_date)?;
            let mut contact = Contact::new(
                &last_name,
                &first_name,
                &middle_name,
                birth_date,
                &address,
                &email,
            )?;
            contact.add_phone_numbers(&phones)?;

            if !directory.add_contact(contact) {
                error!("Contact was not saved");
                bail!("Failed to save contact to {}", path.display());
            }
            println!("Added contact #{}", directory.len());
        }
        Commands::Remove { number } => {
            let index = to_index(number)?;
            if !directory.remove_contact(index)? {
                bail!("Failed to save removal to {}", path.display());
            }
            println!("Removed contact #{}", number);
        }
        Commands::Edit {
            number,
            last_name,
            first_name,
            middle_name,
            birth_date,
            address,
            email,
            phones,
        } => {
            let index = to_index(number)?;
            let mut contact = directory
                .contact(index)
                .cloned()
                .with_context(|| format!("No contact #{}", number))?;

            if let Some(value) = last_name {
                contact.set_last_name(&value)?;
            }
            if let Some(value) = first_name {
                contact.set_first_name(&value)?;
            }
            if let Some(value) = middle_name {
                contact.set_middle_name(&value)?;
            }
            if let Some(value) = birth_date {
                contact.set_birth_date(parse_birth_date(&value)?);
            }
            if let Some(value) = address {
                contact.set_address(&value);
            }
            if let Some(value) = email {
                contact.set_email(&value)?;
            }
            if !phones.is_empty() {
                contact.set_phone_numbers(&phones)?;
            }

            directory.edit_contact(index, contact)?;
            println!("Updated contact #{}", number);
        }
    }

    Ok(())
}

fn print_contacts(directory: &ContactDirectory, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(directory.contacts())?);
        return Ok(());
    }

    println!("PHONE DIRECTORY ({} contacts)", directory.len());
    if directory.is_empty() {
        println!("The directory is empty");
        return Ok(());
    }

    for (i, contact) in directory.contacts().iter().enumerate() {
        println!("Contact #{}:", i + 1);
        println!("{}", contact);
        println!("----------------------------");
    }
    Ok(())
}

fn parse_birth_date(text: &str) -> Result<BirthDate> {
    Ok(BirthDate::parse_dotted(text, birth_date::today())?)
}

/// Contacts are numbered from 1 on screen.
fn to_index(number: usize) -> Result<usize> {
    match number.checked_sub(1) {
        Some(index) => Ok(index),
        None => bail!("Contact numbers start at 1"),
    }
}

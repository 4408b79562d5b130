use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "addrbook", bin_name = "addrbook", version)]
#[command(about = "Personal contact book with notes and birthday countdowns", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a contact
    #[command(alias = "n")]
    Add {
        name: String,

        /// Create a contact that cannot hold notes
        #[arg(long)]
        no_notes: bool,
    },

    /// Show one contact
    #[command(alias = "v")]
    Show { name: String },

    /// Delete a contact
    #[command(alias = "rm")]
    Delete { name: String },

    /// Add a phone number (10 digits)
    AddPhone { name: String, phone: String },

    /// Replace one phone number with another
    EditPhone {
        name: String,
        old: String,
        new: String,
    },

    /// Remove a phone number
    RemovePhone { name: String, phone: String },

    /// Set the birthday (YYYY-MM-DD)
    AddBirthday { name: String, date: String },

    /// Set the email
    AddEmail { name: String, email: String },

    /// Set the address
    AddAddress {
        name: String,
        /// Address words; joined with spaces
        #[arg(required = true, num_args = 1..)]
        address: Vec<String>,
    },

    /// List contacts
    #[command(alias = "ls")]
    List {
        /// Page to show (1-based)
        #[arg(short, long)]
        page: Option<usize>,

        /// Contacts per page (defaults to config page-size)
        #[arg(long)]
        page_size: Option<usize>,

        /// Show every contact on one page
        #[arg(short, long, conflicts_with_all = ["page", "page_size"])]
        all: bool,
    },

    /// Find contacts by phone or name fragment
    #[command(alias = "f")]
    Find { term: String },

    /// Days until a contact's birthday
    Birthday { name: String },

    /// Birthdays in the next N days (defaults to config upcoming-days)
    When { days: Option<i64> },

    /// Attach a note to a contact
    AddNote {
        name: String,
        text: String,

        /// Comma or space separated tags
        #[arg(short, long)]
        tags: Option<String>,
    },

    /// Change the text (and optionally tags) of a note
    EditNote {
        name: String,
        old: String,
        new: String,

        /// Replace the note's tags
        #[arg(short, long)]
        tags: Option<String>,
    },

    /// Remove every note with this exact text
    RemoveNote { name: String, text: String },

    /// List notes, for one contact or for everyone
    Notes { name: Option<String> },

    /// Notes carrying a tag
    Tag { tag: String },

    /// Delete all notes of a contact
    ClearNotes { name: String },

    /// Get or set configuration values
    Config {
        /// Configuration key (data-file, page-size, upcoming-days, log-level)
        key: Option<String>,

        /// Value to set
        value: Option<String>,
    },
}

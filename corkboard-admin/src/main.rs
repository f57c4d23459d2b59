//! corkboard-admin: operator console for the store.
//!
//! Table management plus direct CRUD against each entity table, one
//! subcommand per operation so everything is scriptable:
//!
//! ```text
//! corkboard-admin messages create-table
//! corkboard-admin messages add "Hello" "World"
//! corkboard-admin messages like 1
//! corkboard-admin users list
//! corkboard-admin votes remove 3
//! ```
//!
//! Connection parameters come from the environment, same as the server.

use anyhow::Result;
use clap::{Parser, Subcommand};
use serde_json::to_string_pretty;
use tracing_subscriber::EnvFilter;

use corkboard_store::{
    schema, CommentRepo, ExecOutcome, MessageRepo, Store, StoreConfig, UserRepo, VoteRepo,
};

#[derive(Parser, Debug)]
#[command(
    name = "corkboard-admin",
    author,
    version,
    about = "Admin console for the corkboard store"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Message table operations
    Messages {
        #[command(subcommand)]
        command: MessageCmd,
    },
    /// User table operations
    Users {
        #[command(subcommand)]
        command: UserCmd,
    },
    /// Vote table operations
    Votes {
        #[command(subcommand)]
        command: VoteCmd,
    },
    /// Comment table operations
    Comments {
        #[command(subcommand)]
        command: CommentCmd,
    },
    /// Create all four tables
    CreateAll,
    /// Drop all four tables
    DropAll,
}

#[derive(Subcommand, Debug)]
enum MessageCmd {
    CreateTable,
    DropTable,
    /// List all messages; --invalid restricts to invalidated ones
    List {
        #[arg(long)]
        invalid: bool,
    },
    Get { id: i32 },
    Add { subject: String, message: String },
    /// Replace the body of a message
    Set { id: i32, message: String },
    Remove { id: i32 },
    Like { id: i32 },
    Unlike { id: i32 },
    Invalidate { id: i32 },
}

#[derive(Subcommand, Debug)]
enum UserCmd {
    CreateTable,
    DropTable,
    List,
    Get { id: i32 },
    Add {
        username: String,
        email: String,
        gender_identity: String,
        sexual_orientation: String,
        note: String,
    },
    Set {
        id: i32,
        username: String,
        email: String,
        gender_identity: String,
        sexual_orientation: String,
        note: String,
    },
    Remove { id: i32 },
}

#[derive(Subcommand, Debug)]
enum VoteCmd {
    CreateTable,
    DropTable,
    List,
    Get { id: i32 },
    Add { email: String, upvote: i32, downvote: i32 },
    Set { id: i32, email: String, upvote: i32, downvote: i32 },
    Remove { id: i32 },
}

#[derive(Subcommand, Debug)]
enum CommentCmd {
    CreateTable,
    DropTable,
    /// List all comments; --invalid restricts to invalidated ones
    List {
        #[arg(long)]
        invalid: bool,
    },
    Get { id: i32 },
    Add { email: String, comment: String },
    Set { id: i32, email: String, comment: String },
    Remove { id: i32 },
    Invalidate { id: i32 },
}

/// Print an outcome the way an operator wants to read it.
fn report(outcome: ExecOutcome) {
    match outcome {
        ExecOutcome::Updated(rows) => println!("ok ({rows} row(s) affected)"),
        ExecOutcome::NotFound => println!("no such row"),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .compact()
        .init();

    let cli = Cli::parse();
    let config = StoreConfig::from_env()?;
    // Unchecked on purpose: table management has to work before the
    // statement set can compile.
    let store = Store::connect_unchecked(&config).await?;
    let pool = store.pool();

    match cli.command {
        Commands::CreateAll => schema::create_all(pool).await?,
        Commands::DropAll => schema::drop_all(pool).await?,

        Commands::Messages { command } => {
            let repo = MessageRepo::new(pool);
            match command {
                MessageCmd::CreateTable => schema::create_message_table(pool).await?,
                MessageCmd::DropTable => schema::drop_message_table(pool).await?,
                MessageCmd::List { invalid } => {
                    let rows = if invalid {
                        repo.select_invalid().await?
                    } else {
                        repo.select_all().await?
                    };
                    println!("{}", to_string_pretty(&rows)?);
                }
                MessageCmd::Get { id } => match repo.select_one(id).await? {
                    Some(row) => println!("{}", to_string_pretty(&row)?),
                    None => println!("no such row"),
                },
                MessageCmd::Add { subject, message } => {
                    let id = repo.insert(&subject, &message).await?;
                    println!("inserted message {id}");
                }
                MessageCmd::Set { id, message } => report(repo.update(id, &message).await?),
                MessageCmd::Remove { id } => report(repo.delete(id).await?),
                MessageCmd::Like { id } => report(repo.increment_likes(id).await?),
                MessageCmd::Unlike { id } => report(repo.decrement_likes(id).await?),
                MessageCmd::Invalidate { id } => report(repo.invalidate(id).await?),
            }
        }

        Commands::Users { command } => {
            let repo = UserRepo::new(pool);
            match command {
                UserCmd::CreateTable => schema::create_user_table(pool).await?,
                UserCmd::DropTable => schema::drop_user_table(pool).await?,
                UserCmd::List => println!("{}", to_string_pretty(&repo.select_all().await?)?),
                UserCmd::Get { id } => match repo.select_one(id).await? {
                    Some(row) => println!("{}", to_string_pretty(&row)?),
                    None => println!("no such row"),
                },
                UserCmd::Add {
                    username,
                    email,
                    gender_identity,
                    sexual_orientation,
                    note,
                } => {
                    let id = repo
                        .insert(&username, &email, &gender_identity, &sexual_orientation, &note)
                        .await?;
                    println!("inserted user {id}");
                }
                UserCmd::Set {
                    id,
                    username,
                    email,
                    gender_identity,
                    sexual_orientation,
                    note,
                } => report(
                    repo.update(
                        id,
                        &username,
                        &email,
                        &gender_identity,
                        &sexual_orientation,
                        &note,
                    )
                    .await?,
                ),
                UserCmd::Remove { id } => report(repo.delete(id).await?),
            }
        }

        Commands::Votes { command } => {
            let repo = VoteRepo::new(pool);
            match command {
                VoteCmd::CreateTable => schema::create_vote_table(pool).await?,
                VoteCmd::DropTable => schema::drop_vote_table(pool).await?,
                VoteCmd::List => println!("{}", to_string_pretty(&repo.select_all().await?)?),
                VoteCmd::Get { id } => match repo.select_one(id).await? {
                    Some(row) => println!("{}", to_string_pretty(&row)?),
                    None => println!("no such row"),
                },
                VoteCmd::Add { email, upvote, downvote } => {
                    let id = repo.insert(&email, upvote, downvote).await?;
                    println!("inserted vote {id}");
                }
                VoteCmd::Set { id, email, upvote, downvote } => {
                    report(repo.update(id, &email, upvote, downvote).await?)
                }
                VoteCmd::Remove { id } => report(repo.delete(id).await?),
            }
        }

        Commands::Comments { command } => {
            let repo = CommentRepo::new(pool);
            match command {
                CommentCmd::CreateTable => schema::create_comment_table(pool).await?,
                CommentCmd::DropTable => schema::drop_comment_table(pool).await?,
                CommentCmd::List { invalid } => {
                    let rows = if invalid {
                        repo.select_invalid().await?
                    } else {
                        repo.select_all().await?
                    };
                    println!("{}", to_string_pretty(&rows)?);
                }
                CommentCmd::Get { id } => match repo.select_one(id).await? {
                    Some(row) => println!("{}", to_string_pretty(&row)?),
                    None => println!("no such row"),
                },
                CommentCmd::Add { email, comment } => {
                    let id = repo.insert(&email, &comment).await?;
                    println!("inserted comment {id}");
                }
                CommentCmd::Set { id, email, comment } => {
                    report(repo.update(id, &email, &comment).await?)
                }
                CommentCmd::Remove { id } => report(repo.delete(id).await?),
                CommentCmd::Invalidate { id } => report(repo.invalidate(id).await?),
            }
        }
    }

    store.close().await;
    Ok(())
}

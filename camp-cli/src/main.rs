use std::fmt::Write as _;
use std::process;

use anyhow::{Context, Result, anyhow};
use camp_client::{CampClient, CampClientError, CampingPost, JoinCampingPost, User};
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt};

const SERVER_ENV: &str = "CAMP_API_URL";
const DEFAULT_SERVER: &str = "http://127.0.0.1:5000";

#[derive(Debug, Parser)]
#[command(name = "camp-cli", version, about = "CLI клиент для внешнего camps API")]
struct Cli {
    /// Адрес camps API (иначе берётся CAMP_API_URL или значение по умолчанию).
    #[arg(long, global = true)]
    server: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Карточка похода по slug.
    Show {
        /// Slug поста из адресной строки.
        slug: String,

        /// Вывести полезную нагрузку как JSON вместо текстовой карточки.
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

async fn run() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_logging("info")?;

    let server = resolve_server(cli.server, std::env::var(SERVER_ENV).ok());
    let client = CampClient::new(server.clone());

    match cli.command {
        Command::Show { slug, json } => {
            debug!(%slug, %server, "requesting camping post");
            let post = client.get_camp(&slug).await.map_err(map_client_error)?;

            match post {
                None => println!("No post found"),
                Some(post) if json => {
                    let rendered = serde_json::to_string_pretty(&post)
                        .context("failed to encode camping post as JSON")?;
                    println!("{rendered}");
                }
                Some(post) => print!("{}", render_post(&post)),
            }
        }
    }

    Ok(())
}

fn init_logging(default_level: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .compact()
        .try_init()
        .map_err(|e| anyhow!("failed to init logging: {e}"))?;

    Ok(())
}

fn resolve_server(flag: Option<String>, env: Option<String>) -> String {
    let raw = flag
        .or_else(|| env.filter(|value| !value.trim().is_empty()))
        .unwrap_or_else(|| DEFAULT_SERVER.to_string());
    normalize_server(raw)
}

fn normalize_server(server: String) -> String {
    if server.starts_with("http://") || server.starts_with("https://") {
        return server;
    }

    format!("http://{server}")
}

fn map_client_error(err: CampClientError) -> anyhow::Error {
    anyhow!(view_error_message(&err))
}

fn view_error_message(err: &CampClientError) -> String {
    match err {
        // Сетевая ошибка и ошибка декодирования показываются своим текстом,
        // любой неуспешный HTTP-статус сворачивается в фиксированное сообщение.
        CampClientError::Http(inner) => inner.to_string(),
        _ => "Failed to fetch camping post".to_string(),
    }
}

fn format_date(ts: &DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d").to_string()
}

fn join_or_placeholder(items: &[String], placeholder: &str) -> String {
    if items.is_empty() {
        placeholder.to_string()
    } else {
        items.join(", ")
    }
}

fn render_post(post: &CampingPost) -> String {
    let mut out = String::new();

    if !post.images.is_empty() {
        let _ = writeln!(out, "Images:");
        for image in &post.images {
            let _ = writeln!(out, "  - {image}");
        }
        let _ = writeln!(out);
    }

    let _ = writeln!(out, "{}", post.title);
    let _ = writeln!(out, "Description: {}", post.description);
    let _ = writeln!(out, "Location: {}", post.location);
    let _ = writeln!(out, "Start Date: {}", format_date(&post.start_date));
    let _ = writeln!(out, "End Date: {}", format_date(&post.end_date));
    let _ = writeln!(
        out,
        "Equipment: {}",
        join_or_placeholder(&post.equipment, "No equipment listed")
    );
    let _ = writeln!(out, "Places: {}", post.places);
    let _ = writeln!(out, "Age Category: {}", post.age_category);
    let _ = writeln!(out, "Status: {}", post.status);
    let _ = writeln!(out, "Category: {}", post.category);

    let _ = writeln!(out);
    let _ = writeln!(out, "Organizer Details");
    out.push_str(&render_organizer(&post.user));

    let _ = writeln!(out);
    let _ = writeln!(out, "Joined Users");
    if post.join_camping_posts.is_empty() {
        let _ = writeln!(out, "No users have joined this camping post yet.");
    } else {
        for (index, join) in post.join_camping_posts.iter().enumerate() {
            if index > 0 {
                let _ = writeln!(out);
            }
            out.push_str(&render_participant(join));
        }
    }

    out
}

fn render_organizer(user: &User) -> String {
    let mut out = String::new();

    if let Some(avatar) = user.images_profile.first() {
        let _ = writeln!(out, "Avatar: {avatar}");
    }
    let _ = writeln!(out, "Name: {}", user.name);
    let _ = writeln!(out, "Email: {}", user.email);
    let _ = writeln!(out, "Phone: {}", user.phone_number);
    let _ = writeln!(out, "Address: {}", user.address);
    let _ = writeln!(out, "Bio: {}", user.bio);
    let _ = writeln!(out, "Interests: {}", user.interests.join(", "));
    let _ = writeln!(out, "Date of Birth: {}", format_date(&user.date_of_birth));

    out
}

fn render_participant(join: &JoinCampingPost) -> String {
    let mut out = String::new();

    if let Some(avatar) = join.user.images_profile.first() {
        let _ = writeln!(out, "Avatar: {avatar}");
    }
    let _ = writeln!(out, "Name: {}", join.user.name);
    let _ = writeln!(out, "Email: {}", join.user.email);
    let _ = writeln!(out, "Phone: {}", join.user.phone_number);
    let _ = writeln!(out, "Address: {}", join.user.address);
    let _ = writeln!(out, "Interests: {}", join.user.interests.join(", "));

    out
}

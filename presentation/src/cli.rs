use crate::render::{TerminalNotifier, TerminalRenderer};
use application::catalog_service::CatalogService;
use application::chat_service::ChatService;
use application::notifier::Notifier;
use application::story_service::{StoryOutcome, StoryService};
use clap::Parser;
use colored::Colorize;
use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::terminal::{Clear, ClearType};
use dialoguer::{theme::ColorfulTheme, Input};
use domain::form::{Form, FormField, FormRegistry};
use domain::input_meter::{can_send, InputMeter, MeterLevel};
use domain::product::Product;
use domain::session::{ChatSession, SubmitOutcome};
use infrastructure::catalog::load_catalog;
use infrastructure::config::Config;
use infrastructure::export_writer::ExportWriter;
use infrastructure::marketplace_client::MarketplaceClient;
use infrastructure::preview;
use shared::confirmation::ask_confirmation;
use shared::types::Result;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info};

const DEFAULT_STORY_CATEGORY: &str = "general";
const STORY_FORM: &str = "story";

/// Canned prompts sent with `/1` .. `/4`.
const QUICK_MESSAGES: [&str; 4] = [
    "Show me popular handmade products",
    "How do I contact an artisan?",
    "What payment methods do you accept?",
    "Tell me about the artisans on this marketplace",
];

#[derive(Parser, Debug)]
#[command(name = "artisan_chat")]
#[command(about = "Artisan Marketplace assistant: chat, catalog search and product stories")]
pub struct Cli {
    /// Enter interactive chat mode (the default)
    #[arg(long)]
    pub chat: bool,

    /// Filter the product catalog by a search term
    #[arg(long)]
    pub search: Option<String>,

    /// Filter the catalog by category, or set the story category
    #[arg(long)]
    pub category: Option<String>,

    /// Rank products by comma-separated preferences
    #[arg(long)]
    pub recommend: Option<String>,

    /// Generate a product story from the trailing description
    #[arg(long)]
    pub story: bool,

    /// Print an inline data URL for a local image
    #[arg(long)]
    pub preview: Option<PathBuf>,

    /// First chat message, or the story description
    #[arg(trailing_var_arg = true)]
    pub args: Vec<String>,
}

pub struct CliApp {
    config: Config,
    notifier: Notifier,
}

impl CliApp {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            notifier: Notifier::new(Arc::new(TerminalNotifier)),
        }
    }

    pub async fn run(&mut self, cli: Cli) -> Result<()> {
        let args_str = cli.args.join(" ");
        if let Some(path) = &cli.preview {
            self.handle_preview(path)
        } else if cli.story {
            self.handle_story(&args_str, cli.category.as_deref()).await
        } else if let Some(prefs) = &cli.recommend {
            self.handle_recommend(prefs)
        } else if cli.search.is_some() || cli.category.is_some() {
            self.handle_browse(cli.search.as_deref(), cli.category.as_deref())
        } else {
            self.handle_chat(&args_str).await
        }
    }

    async fn handle_chat(&self, first_message: &str) -> Result<()> {
        let client = MarketplaceClient::new(&self.config);
        info!(base_url = client.base_url(), "starting chat");
        let service = ChatService::with_session(client, ChatSession::with_welcome());
        let renderer = Arc::new(TerminalRenderer);
        for message in service.history() {
            renderer.print_message(&message);
        }
        service.subscribe(renderer);

        print_quick_messages();
        if !first_message.trim().is_empty() {
            service.submit(first_message).await;
        }

        loop {
            let input: String = Input::with_theme(&ColorfulTheme::default())
                .with_prompt("You")
                .allow_empty(true)
                .interact_text()?;

            match input.trim() {
                "exit" | "quit" | "/quit" => break,
                "/reset" => {
                    if ask_confirmation("Clear the conversation?", false)? {
                        execute!(std::io::stdout(), Clear(ClearType::All), MoveTo(0, 0))?;
                        service.reset();
                    }
                    continue;
                }
                "/export" => {
                    self.export(&service);
                    continue;
                }
                "/copy" => {
                    self.copy_last_reply(&service);
                    continue;
                }
                "/help" => {
                    print_quick_messages();
                    continue;
                }
                other => {
                    if let Some(quick) = quick_message(other) {
                        service.send_quick_message(quick).await;
                        continue;
                    }
                }
            }

            if !can_send(&input, service.is_pending()) {
                continue;
            }
            let meter = InputMeter::measure(&input);
            if meter.over_budget() {
                self.notifier
                    .warning(format!("Message too long ({}). Please shorten it.", meter.label()));
                continue;
            }
            match meter.level {
                MeterLevel::Normal => {}
                MeterLevel::Caution => eprintln!("{}", meter.label().yellow()),
                MeterLevel::Critical => eprintln!("{}", meter.label().red()),
            }

            if let SubmitOutcome::Skipped(reason) = service.submit(&input).await {
                debug!(?reason, "nothing sent");
            }
        }
        Ok(())
    }

    fn export<T>(&self, service: &ChatService<T>) {
        let export = service.export();
        let writer = ExportWriter::new(&self.config.export_dir);
        let written = writer
            .write_json(&export)
            .and_then(|json| Ok((json, writer.write_html(&export)?)));
        match written {
            Ok((json, html)) => {
                self.notifier.success(format!(
                    "Conversation exported to {} and {}",
                    json.display(),
                    html.display()
                ));
            }
            Err(err) => {
                self.notifier.error(format!("Export failed: {err:#}"));
            }
        }
    }

    fn copy_last_reply<T>(&self, service: &ChatService<T>) {
        let Some(reply) = service.last_bot_reply() else {
            self.notifier.info("Nothing to copy yet.");
            return;
        };
        match arboard::Clipboard::new().and_then(|mut cb| cb.set_text(reply)) {
            Ok(()) => self.notifier.success("Copied to clipboard."),
            Err(err) => self.notifier.error(format!("Clipboard copy failed: {err}")),
        };
    }

    async fn handle_story(&self, description: &str, category: Option<&str>) -> Result<()> {
        let category = category.unwrap_or(DEFAULT_STORY_CATEGORY);
        let mut forms = FormRegistry::new();
        forms.insert(
            STORY_FORM,
            Form::new(vec![
                FormField::required("description", description),
                FormField::required("category", category),
            ]),
        );
        if !forms.validate_required_fields(STORY_FORM) {
            if let Some(form) = forms.get(STORY_FORM) {
                for field in form.flagged() {
                    eprintln!("{} {}", "Missing:".red().bold(), field.name);
                }
            }
            return Ok(());
        }

        let client = MarketplaceClient::new(&self.config);
        let service = StoryService::new(client, self.notifier.clone());
        eprintln!("{}", "Generating...".dimmed());
        if let StoryOutcome::Generated(story) = service.generate(description, category).await {
            println!("{}", story);
        }
        Ok(())
    }

    fn catalog(&self) -> Result<CatalogService> {
        Ok(CatalogService::new(load_catalog(&self.config.catalog_path)?))
    }

    fn handle_browse(&self, term: Option<&str>, category: Option<&str>) -> Result<()> {
        let catalog = self.catalog()?;
        let hits = catalog.browse(term, category);
        if hits.is_empty() {
            println!("{}", "No products match.".yellow());
            println!(
                "{} {}",
                "Categories:".dimmed(),
                catalog.catalog().categories().join(", ")
            );
        }
        for product in hits {
            print_product(product);
            catalog.track_view(product.id);
        }
        Ok(())
    }

    fn handle_recommend(&self, preferences: &str) -> Result<()> {
        let catalog = self.catalog()?;
        let ranked = catalog.recommend(preferences);
        if ranked.is_empty() {
            println!("{}", "No products match those preferences.".yellow());
        }
        for entry in ranked {
            print!("{} ", format!("[{}]", entry.score).magenta());
            print_product(&entry.product);
            catalog.track_interaction(entry.product.id, "recommended");
        }
        Ok(())
    }

    fn handle_preview(&self, path: &Path) -> Result<()> {
        let url = preview::data_url(path)?;
        println!("{}", url);
        Ok(())
    }
}

fn quick_message(command: &str) -> Option<&'static str> {
    let index: usize = command.strip_prefix('/')?.parse().ok()?;
    QUICK_MESSAGES.get(index.checked_sub(1)?).copied()
}

fn print_quick_messages() {
    println!("{}", "Commands: /reset, /export, /copy, /help, /quit".dimmed());
    for (i, text) in QUICK_MESSAGES.iter().enumerate() {
        println!("{}", format!("  /{} {}", i + 1, text).dimmed());
    }
}

fn print_product(product: &Product) {
    let price = product
        .price
        .map(|p| format!(" ${:.2}", p))
        .unwrap_or_default();
    println!(
        "{} {}{}\n    {}",
        product.name.bold(),
        format!("({})", product.category).dimmed(),
        price.green(),
        product.description
    );
}

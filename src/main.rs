mod cli;
mod config;
mod context;
mod edit;
mod export;
mod generate;
mod image;
mod poster;
mod qr;
mod scrape;
mod session;

use clap::Parser;

use cli::{Args, Command};
use config::AppConfig;
use context::AppContext;
use session::{Session, SessionPhase};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();
    let config = AppConfig::load(args.config.as_deref())?;

    let mut ctx = {
        let session = Session::read_from_or_new(&config.session_file_path.0)?;
        let scraper = scrape::Client::new(config.proxy.root_url.clone());

        AppContext {
            config,
            session,
            scraper,
        }
    };

    match args.command {
        Command::Generate { url } => generate::generate_poster(&mut ctx, &url)?,
        Command::Show => match ctx.session.active_poster() {
            Some(poster) => {
                if ctx.session.phase == SessionPhase::Editing {
                    println!("Poster (draft under edit):");
                } else {
                    println!("Poster:");
                }
                poster.print_summary();
            }
            None => println!("No poster; run 'generate <url>' first."),
        },
        Command::Edit => edit::begin_edit(&mut ctx)?,
        Command::Set { field, value } => edit::set_field(&mut ctx, &field, &value)?,
        Command::Upload { image_path } => edit::upload_image(&mut ctx, &image_path)?,
        Command::Save => edit::save(&mut ctx)?,
        Command::Cancel => edit::cancel(&mut ctx)?,
        Command::Export { output_path } => export::export_poster(&ctx, &output_path)?,
        Command::Close => {
            ctx.session.close()?;
            ctx.write_session()?;
            println!("Poster closed.");
        }
    };

    Ok(())
}

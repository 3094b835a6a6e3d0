extern crate clap;
extern crate pretty_env_logger;
extern crate termcolor;
extern crate tokio;

use cf_solutions::{options::expand_env, Downloader, Options};
use clap::{crate_description, crate_name, Arg, ArgMatches, Command};
use std::{env, fs::File, path::PathBuf, process::exit};
use termcolor::{ColorChoice, StandardStream, WriteColor};

#[macro_use]
mod color;
mod write;

use write::{write_outcome, write_summary};

fn init_logger() {
    pretty_env_logger::formatted_timed_builder()
        .parse_filters(&env::var("RUST_LOG").unwrap_or_else(|_| String::from("info")))
        .init();
}

fn load_options(app: &ArgMatches) -> Result<Options, String> {
    let mut options = match (app.value_of("config"), app.value_of("handle")) {
        (Some(f), _) => File::open(f)
            .map_err(|e| format!("Error open {}: {}", f, e))
            .and_then(|v| Options::from_reader(v).map_err(|e| e.to_string()))?,
        (None, Some(h)) => Options::new(h, "~/Downloads/CodeforcesDownloader"),
        (None, None) => return Err(String::from("Either --handle or --config is required")),
    };
    if let Some(h) = app.value_of("handle") {
        options.handle = h.to_string();
    }
    if let Some(f) = app.value_of("folder") {
        options.folder = PathBuf::from(f);
    }
    if let Some(c) = app.value_of("cookie") {
        options.cookie = Some(c.to_string());
    }
    if let Some(w) = app.value_of("wget") {
        options.wget = PathBuf::from(w);
    }
    if let Some(l) = app.value_of("lang") {
        options.lang = l.to_string();
    }
    if app.is_present("no-statements") {
        options.statements = false;
    }
    options.folder = PathBuf::from(expand_env(&options.folder.to_string_lossy()));
    Ok(options)
}

fn option(name: &'static str, about: &'static str) -> Arg<'static> {
    Arg::new(name).long(name).takes_value(true).help(about)
}

#[tokio::main]
async fn main() {
    init_logger();
    let mut stdout = StandardStream::stdout(ColorChoice::Auto);
    let app = Command::new(crate_name!())
        .about(crate_description!())
        .version(get_version!("version"))
        .long_version(get_version!("long_version"))
        .arg(option("config", "YAML file with options").short('c'))
        .arg(option("handle", "User name (handle)").short('u'))
        .arg(option("folder", "Folder to save the data").short('f'))
        .arg(option("cookie", "Cookie header of a logged in session, required for gyms"))
        .arg(option("wget", "Path to wget, used to save problem statements"))
        .arg(option("lang", "Locale of API responses and statements"))
        .arg(Arg::new("no-statements").long("no-statements").help("Only download source code"))
        .get_matches();

    let options = match load_options(&app) {
        Ok(v) => v,
        Err(e) => {
            write_error!(&mut stdout, "Error", "{}", e);
            exit(2);
        }
    };
    let downloader = match Downloader::new(options) {
        Ok(v) => v,
        Err(e) => {
            write_error!(&mut stdout, "Error", "{}", e);
            exit(2);
        }
    };
    write_info!(
        &mut stdout,
        "Info",
        "Downloading accepted solutions of {} into {}",
        downloader.options().handle,
        downloader.options().folder.display()
    );
    let ret = downloader
        .run(|submission, outcome| write_outcome(&mut stdout, submission, outcome))
        .await;
    match ret {
        Ok(summary) => write_summary(&mut stdout, &summary),
        Err(e) => {
            write_error!(&mut stdout, "Error", "{}", e);
            stdout.reset().ok();
            exit(1);
        }
    }
    stdout.reset().ok();
}

use clap::{Parser, Subcommand};
use encore::codec;
use encore::poster;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "encore", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// A handoff path or bare query string; prints the poster SVG to stdout
    query: Option<String>,
}

#[derive(Subcommand, Debug, Clone)]
enum Commands {
    /// Decode a handoff string and write portato_recommendation.svg
    Render {
        query: String,

        /// Directory to write the poster into
        #[arg(short, long, default_value = ".")]
        out_dir: PathBuf,
    },
    /// Print the decoded selection as a summary list
    Summary { query: String },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Render { query, out_dir }) => render(&query, &out_dir),
        Some(Commands::Summary { query }) => {
            let selection = codec::decode(codec::query_part(&query));
            for (prompt, value) in poster::summary_lines(&selection) {
                println!("{prompt}  {value}");
            }
            Ok(())
        }
        None => {
            if let Some(query) = cli.query {
                let selection = codec::decode(codec::query_part(&query));
                println!("{}", poster::render_artifact(&selection).to_svg());
                Ok(())
            } else {
                use clap::CommandFactory;
                Cli::command().print_help()?;
                Ok(())
            }
        }
    }
}

fn render(query: &str, out_dir: &Path) -> anyhow::Result<()> {
    let selection = codec::decode(codec::query_part(query));
    let path = out_dir.join(poster::POSTER_FILENAME);
    fs_err::write(&path, poster::render_artifact(&selection).to_svg())?;
    log::info!("poster written to {}", path.display());
    println!("{}", path.display());
    Ok(())
}

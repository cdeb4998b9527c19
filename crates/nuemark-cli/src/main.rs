use std::{collections::BTreeMap, fs, io::Write, path::PathBuf};

use anyhow::{Context, Result, bail};
use clap::Parser;
use nuemark_config::Config;
use nuemark_engine::{Document, RenderData, RenderOptions};

#[derive(Parser)]
#[command(name = "nuemark", version, about = "Compile Nuemark documents to HTML")]
struct Cli {
    /// Nuemark source file
    file: PathBuf,

    /// Config file (defaults to ~/.config/nuemark/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Add ids and anchor links to headings
    #[arg(long)]
    heading_ids: bool,

    /// Render sections with these classes (comma separated)
    #[arg(long, value_delimiter = ',')]
    sections: Option<Vec<String>>,

    /// Prepend a table of contents
    #[arg(long)]
    toc: bool,

    /// Extra reflink, `label=href "title"`. Repeatable.
    #[arg(short, long = "link", value_parser = parse_link)]
    links: Vec<(String, String)>,

    /// Print the front matter as YAML instead of rendering
    #[arg(long)]
    meta: bool,

    /// Write HTML to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn parse_link(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((label, href)) if !label.is_empty() => Ok((label.to_string(), href.to_string())),
        _ => Err(format!("expected `label=href`, got `{s}`")),
    }
}

fn load_config(cli: &Cli) -> Result<Config> {
    let config = match &cli.config {
        Some(path) => match Config::load_from_path(path)? {
            Some(config) => config,
            None => bail!("Config file '{}' not found", path.display()),
        },
        None => Config::load()?.unwrap_or_default(),
    };
    log::debug!("Effective config: {config:?}");
    Ok(config)
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;

    let text = fs::read_to_string(&cli.file)
        .with_context(|| format!("Failed to read '{}'", cli.file.display()))?;
    let doc = Document::parse(&text)
        .with_context(|| format!("Failed to parse '{}'", cli.file.display()))?;

    if cli.meta {
        print!("{}", serde_yaml::to_string(doc.meta())?);
        return Ok(());
    }

    let mut links: BTreeMap<String, String> = config.links;
    links.extend(cli.links);
    let data = RenderData {
        sections: cli.sections.or(config.sections),
        heading_ids: cli.heading_ids || config.heading_ids,
        links,
    };
    let toc = cli.toc || config.toc;

    log::info!(
        "Rendering '{}' ({} blocks, title {:?})",
        cli.file.display(),
        doc.blocks().len(),
        doc.title()
    );

    let mut html = doc.render(RenderOptions {
        data,
        ..Default::default()
    })?;
    if toc {
        html = format!("{}\n{html}", doc.render_toc());
    }

    match cli.output.or(config.output) {
        Some(path) => {
            fs::write(&path, html)
                .with_context(|| format!("Failed to write '{}'", path.display()))?;
            log::info!("Wrote {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{html}")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_link_argument() {
        assert_eq!(
            parse_link(r#"docs=/docs "Docs""#),
            Ok(("docs".to_string(), r#"/docs "Docs""#.to_string()))
        );
        assert!(parse_link("nolabel").is_err());
        assert!(parse_link("=/x").is_err());
    }

    #[test]
    fn cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn sections_split_on_commas() {
        let cli = Cli::parse_from(["nuemark", "page.md", "--sections", "hero,features", "-l", "a=/a"]);
        assert_eq!(cli.sections, Some(vec!["hero".to_string(), "features".to_string()]));
        assert_eq!(cli.links, vec![("a".to_string(), "/a".to_string())]);
    }
}

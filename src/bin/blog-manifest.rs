use clap::Parser;
use site_manifests::{blog, config, output};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "blog-manifest")]
#[command(version, about = "Generate the blog manifest from Markdown posts")]
#[command(long_about = "\
Generate the blog manifest from Markdown posts

Reads every *.md file directly inside the posts directory, validates its
frontmatter, and writes manifest.json next to the posts, newest first.

Frontmatter:

  ---
  title: Hello, world          # required
  date: 2024-03-05             # required, ISO-8601 for correct ordering
  summary: \"A first post\"      # optional
  tags: [rust, \"static sites\"] # optional
  ---

Paths come from manifests.toml in the site root when present
(default: assets/blog/manifest.json).")]
struct Cli {
    /// Site root: where manifests.toml is read and what paths are relative to
    #[arg(long, default_value = ".")]
    site_root: PathBuf,

    /// List every post after the summary line
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = config::load_config(&cli.site_root)?;
    let posts_dir = config.blog.dir_in(&cli.site_root);
    let result = blog::generate(&posts_dir, &config.blog.manifest)?;
    output::print_blog_output(&result.posts, &result.manifest_path, cli.verbose);
    Ok(())
}

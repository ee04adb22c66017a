use clap::Parser;
use site_manifests::{config, gallery, output};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "gallery-manifest")]
#[command(version, about = "Generate the gallery manifest, keeping existing captions")]
#[command(long_about = "\
Generate the gallery manifest, keeping existing captions

Subdirectories of the gallery root become albums; images directly in the
root are listed as ungrouped. Captions typed into the existing manifest.json
are kept as long as the photo's file name (and album folder) is unchanged.

Gallery structure:

  assets/gallery/
  ├── manifest.json      # Captions are read from here, then it is rewritten
  ├── sunset.jpg         # Ungrouped
  └── Trip/              # Album; cover is the first image by name
      ├── a.png
      └── b.jpg

Images: jpg, jpeg, png, gif, webp, avif, heic, heif (any case).
Paths come from manifests.toml in the site root when present
(default: assets/gallery/manifest.json).")]
struct Cli {
    /// Site root: where manifests.toml is read and what paths are relative to
    #[arg(long, default_value = ".")]
    site_root: PathBuf,

    /// List albums and photos after the summary line
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
    let gallery_dir = config.gallery.dir_in(&cli.site_root);
    let result = gallery::generate(&gallery_dir, &config.gallery.manifest)?;
    output::print_gallery_output(&result.manifest, &result.manifest_path, cli.verbose);
    Ok(())
}

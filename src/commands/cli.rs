//! Command-line definition

use clap::{Arg, ArgAction, Command as ClapCommand};

/// The `splyt` argument parser
pub fn cli() -> ClapCommand {
    ClapCommand::new("splyt")
        .version("1.0")
        .author("Xandr Stagwood")
        .about("Split images into a grid of tiles")
        .after_help(
            "Examples:\n  \
             splyt photo.jpg             split into 3 tiles along the long side\n  \
             splyt photo.jpg 4x3 out     4 columns, 3 rows, saved under out/\n  \
             splyt pano.png 3x1 1:1      square tiles, remainder kept as extra tiles\n  \
             splyt ./pictures 2 2        every image of the directory",
        )
        .arg(
            Arg::new("args")
                .help("Source image or directory, optional destination, grid (N or NxM) and aspect ratio (X:Y)")
                .value_name("ARGS")
                .num_args(0..)
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("no-copy-metadata")
                .short('c')
                .long("no-copy-metadata")
                .help("Do not copy the source image's metadata")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("no-metadata")
                .short('C')
                .long("no-metadata")
                .help("Neither copy metadata nor add the provenance note")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("flat")
                .long("flat")
                .help("Write tiles straight into the destination instead of a per-image directory")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("TOML file overriding the built-in defaults")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .help("Also write the log to this file")
                .value_name("FILE")
                .required(false),
        )
}

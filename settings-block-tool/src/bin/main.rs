use std::fs;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use settings_block_tool::image::hex_dump;
use settings_block_tool::SettingsSheet;

#[derive(Parser)]
#[command(name = "settings-block-tool")]
#[command(about = "Settings block generator and parser", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a block image from a CSV file
    Generate {
        /// Input CSV file path
        input: PathBuf,

        /// Output binary file path
        output: PathBuf,

        /// Pad the image to a full 512 byte disk sector
        #[arg(short, long)]
        sector: bool,
    },
    /// Parse a block image to a CSV file
    Parse {
        /// Input binary file path
        input: PathBuf,

        /// Output CSV file path
        output: PathBuf,

        /// The input holds hex text instead of raw bytes
        #[arg(long)]
        hex: bool,
    },
    /// Print a block image as hex and check it
    Dump {
        /// Input binary file path
        input: PathBuf,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            input,
            output,
            sector,
        } => {
            println!("Parsing CSV file: {}", input.display());
            let sheet = SettingsSheet::from_csv_file(&input)?;
            println!("Found {} entries", sheet.entries.len());

            sheet.generate_block_file(&output, sector)?;

            println!("Successfully generated settings block: {}", output.display());

            Ok(())
        }
        Commands::Parse { input, output, hex } => {
            println!("Parsing block image: {}", input.display());
            let sheet = if hex {
                SettingsSheet::parse_block_hex(&fs::read_to_string(&input)?)?
            } else {
                SettingsSheet::parse_block_file(&input)?
            };
            println!("Found {} entries", sheet.entries.len());

            sheet.to_csv_file(&output)?;

            println!("Successfully parsed settings block to: {}", output.display());

            Ok(())
        }
        Commands::Dump { input } => {
            let data = fs::read(&input)?;
            print!("{}", hex_dump(&data));

            match SettingsSheet::parse_block(&data) {
                Ok(sheet) => {
                    println!("valid, {} entries", sheet.entries.len());
                    for entry in &sheet.entries {
                        println!("  {:<14}{}", entry.field.name(), entry.value);
                    }
                }
                Err(e) => println!("{e}"),
            }

            Ok(())
        }
    }
}

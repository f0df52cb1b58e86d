use clap::Parser;
use mm_paper::pagesize::{Orientation, PaperFormat};
use mm_paper::{Colour, Mm, RenderConfig, DEFAULT_OUTPUT};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "mm-paper",
    version,
    about = "Generate millimeter paper in A3 or A4 format"
)]
pub struct Cli {
    #[arg(long, value_enum, default_value_t = PaperFormat::A4, help = "Paper format")]
    pub format: PaperFormat,

    #[arg(long, value_enum, default_value_t = Orientation::Portrait, help = "Paper orientation")]
    pub orientation: Orientation,

    #[arg(
        long,
        default_value = "0,0,255",
        help = "Colour of the 10mm lines as R,G,B"
    )]
    pub main_color: Colour,

    #[arg(
        long,
        default_value = "200,200,255",
        help = "Colour of the 1mm lines as R,G,B"
    )]
    pub minor_color: Colour,

    #[arg(
        long,
        default_value_t = 1,
        value_parser = clap::value_parser!(u32).range(1..),
        help = "Thickness of the 10mm lines in pixels"
    )]
    pub main_thickness: u32,

    #[arg(
        long,
        default_value_t = 1,
        value_parser = clap::value_parser!(u32).range(1..),
        help = "Thickness of the 1mm lines in pixels"
    )]
    pub minor_thickness: u32,

    #[arg(long, default_value_t = 10, help = "Margin size in mm")]
    pub margin: u32,

    #[arg(
        long,
        default_value = DEFAULT_OUTPUT,
        help = "Output file; a .pdf extension writes a PDF, anything else an image"
    )]
    pub output: PathBuf,
}

impl Cli {
    pub fn into_config(self) -> RenderConfig {
        let mut config = RenderConfig::new();
        config
            .format(self.format)
            .orientation(self.orientation)
            .main_colour(self.main_color)
            .minor_colour(self.minor_color)
            .main_thickness(self.main_thickness)
            .minor_thickness(self.minor_thickness)
            .margin(Mm(self.margin))
            .output(self.output);
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn defaults_match_the_library() {
        let cli = Cli::try_parse_from(["mm-paper"]).unwrap();
        assert_eq!(cli.into_config(), RenderConfig::default());
    }

    #[test]
    fn parses_every_flag() {
        let cli = Cli::try_parse_from([
            "mm-paper",
            "--format",
            "A3",
            "--orientation",
            "landscape",
            "--main-color",
            "255,0,0",
            "--minor-color",
            "10,20,30",
            "--main-thickness",
            "3",
            "--minor-thickness",
            "2",
            "--margin",
            "5",
            "--output",
            "out.png",
        ])
        .unwrap();
        let config = cli.into_config();
        assert_eq!(config.page.size(), (Mm(420), Mm(297)));
        assert_eq!(config.style.main_colour, Colour::new_rgb_bytes(255, 0, 0));
        assert_eq!(config.style.minor_colour, Colour::new_rgb_bytes(10, 20, 30));
        assert_eq!(config.style.main_thickness, 3);
        assert_eq!(config.style.minor_thickness, 2);
        assert_eq!(config.margin, Mm(5));
        assert_eq!(config.output, PathBuf::from("out.png"));
    }

    #[test]
    fn bad_colours_are_usage_errors() {
        for bad in ["999,0,0", "1,2", "a,b,c"] {
            let err = Cli::try_parse_from(["mm-paper", "--main-color", bad]).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::ValueValidation, "{bad}");
        }
    }

    #[test]
    fn unknown_format_is_rejected() {
        let err = Cli::try_parse_from(["mm-paper", "--format", "A5"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidValue);
    }

    #[test]
    fn zero_thickness_is_rejected() {
        assert!(Cli::try_parse_from(["mm-paper", "--minor-thickness", "0"]).is_err());
    }
}

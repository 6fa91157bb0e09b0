use geddate::{EventDate, Explanation};

mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const DIM: &str = "\x1b[2m";
    pub const BOLD: &str = "\x1b[1m";

    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";

    pub struct Palette {
        enabled: bool,
    }

    impl Palette {
        pub fn new(enabled: bool) -> Self {
            Self { enabled }
        }

        pub fn paint(&self, s: impl AsRef<str>, color: &str) -> String {
            if self.enabled { format!("{}{}{}", color, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn bold(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", BOLD, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn dim(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", DIM, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }
    }
}

pub fn print_date(date: &EventDate, color: bool) {
    let palette = ansi::Palette::new(color);
    let explanation = date.explain();
    println!("\n{}", palette.bold(palette.paint(format!("⚙  Date: \"{}\"", date.original_text()), ansi::CYAN)));

    println!("\n{}", palette.paint("━━━ Fields ━━━", ansi::GRAY));
    print_fields(&explanation, &palette);

    println!("\n{}", palette.paint("━━━ Result ━━━", ansi::GRAY));
    match date.error_message() {
        None => println!("  {} {}", palette.paint("✓", ansi::GREEN), palette.bold(palette.paint(date.format_date(), ansi::GREEN))),
        Some(message) => {
            println!("  {} {}", palette.paint("✗", ansi::RED), palette.bold(palette.paint(message, ansi::RED)));
            println!("    {} {}", palette.dim("echoed:"), date.format_date());
        }
    }
    if date.significant_reformat() {
        println!(
            "  {} {}",
            palette.paint("!", ansi::YELLOW),
            palette.paint(format!("reformatted {:?}, please review", date.parts().reformat), ansi::YELLOW)
        );
    }

    println!("\n{}", palette.paint("━━━ Derived ━━━", ansi::GRAY));
    print_derived(date, &palette);

    println!("\n{}", palette.paint("━━━ Timing ━━━", ansi::GRAY));
    let metrics = &explanation.run.metrics;
    println!(
        "  Total: {}  │  Normalize: {}  │  Lex: {}  │  Classify: {}  │  Validate: {}",
        palette.paint(format!("{:?}", explanation.total()), ansi::GREEN),
        palette.paint(format!("{:?}", metrics.normalize), ansi::CYAN),
        palette.dim(format!("{:?}", metrics.lex)),
        palette.paint(format!("{:?}", metrics.classify), ansi::CYAN),
        palette.dim(format!("{:?}", explanation.validate)),
    );
    println!();
}

fn print_fields(explanation: &Explanation, palette: &ansi::Palette) {
    let trace = &explanation.run.trace;
    let Some(normalized) = &trace.normalized else {
        println!("{}", palette.dim("  No date text (phrase only, or rejected while normalizing)"));
        return;
    };
    println!("  {} {}", palette.paint("normalized:", ansi::BLUE), normalized);
    let fields = trace
        .fields
        .iter()
        .enumerate()
        .map(|(idx, field)| format!("{}{}", palette.dim(format!("{idx}:")), palette.paint(field, ansi::YELLOW)))
        .collect::<Vec<_>>()
        .join(" ");
    println!("  {} {}", palette.paint("fields:", ansi::BLUE), fields);
}

fn print_derived(date: &EventDate, palette: &ansi::Palette) {
    let show = |value: Option<String>| value.unwrap_or_else(|| "-".to_string());
    let rows = [
        ("earliest year", show(date.earliest_year().map(|y| y.to_string()))),
        ("latest year", show(date.latest_year().map(|y| y.to_string()))),
        ("year range", show(date.year_range())),
        ("sort key", date.date_sort_key().to_string()),
        ("iso date", show(Some(date.iso_date()).filter(|s| !s.is_empty()))),
        ("day bounds", format!("{} ..= {}", date.min_day(), date.max_day())),
    ];
    for (label, value) in rows {
        println!("  {} {}", palette.dim(format!("{label:>13}:")), palette.paint(value, ansi::BLUE));
    }
}

use constel::theme::{Rgba, Theme};

/// Demo window. Optional args: a scheme name (`blue`, `purple`, ...) or a
/// `#rrggbb` color, with `custom <color>` also accepted.
fn main() {
    let mut args = std::env::args().skip(1);
    let theme = match args.next() {
        Some(arg) if arg.starts_with('#') => match Rgba::parse_hex(&arg) {
            Some(color) => Theme::Custom(color),
            None => {
                eprintln!("Unrecognized color {:?}, using the default theme", arg);
                Theme::Default
            }
        },
        Some(name) => {
            let custom = args.next().and_then(|s| Rgba::parse_hex(&s));
            Theme::from_name(&name, custom)
        }
        None => Theme::Default,
    };

    if let Err(e) = constel::window::run(theme) {
        eprintln!("constel: {}", e);
        std::process::exit(1);
    }
}

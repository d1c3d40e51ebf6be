use nanorand::{Rng, WyRand};
use rgb2hsl::color::Rgb;
use rgb2hsl::conv::rgb2hsl;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    if let Some(arg) = std::env::args().nth(1) {
        match arg.parse::<Rgb>() {
            Ok(rgb) => tracing::info!(%rgb, hsl = %rgb2hsl(rgb), "converted argument"),
            Err(err) => tracing::error!(%err, input = arg.as_str(), "couldn't parse color"),
        }
        return;
    }

    let named = [
        ("black", Rgb::BLACK),
        ("white", Rgb::WHITE),
        ("red", Rgb::RED),
        ("green", Rgb::GREEN),
        ("blue", Rgb::BLUE),
        ("teal", Rgb::new(28, 58, 58)),
    ];
    for (name, rgb) in named {
        tracing::info!(name, %rgb, hsl = %rgb2hsl(rgb), "converted");
    }

    let mut rng = WyRand::new();
    let rgb = Rgb::new(rng.generate(), rng.generate(), rng.generate());
    tracing::info!(%rgb, hsl = %rgb2hsl(rgb), "converted a random color");
}

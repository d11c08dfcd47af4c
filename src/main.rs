mod casting;
mod classifier;
mod clock;
mod config;
mod model;
mod renderer;

use casting::{cast_code_hexagram, cast_time_hexagram};
use classifier::{compare_strength, Classifier, TrendClassifier};
use clock::{Clock, SystemClock};
use config::{load_config, AppConfig};
use model::CodeSample;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::time::{sleep, Duration};
use tracing::{error, info, warn};
use tracing_subscriber;

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Load configuration from file, falling back to defaults when absent
    let config: AppConfig = match load_config("config.json") {
        Ok(cfg) => cfg,
        Err(e) => {
            warn!("Config load error: {}; using defaults", e);
            AppConfig::default()
        }
    };

    // Validate the instrument code up front: a malformed code must fail fast,
    // never propagate as a garbage hexagram.
    let code = match CodeSample::parse(&config.stock_code) {
        Ok(c) => c,
        Err(e) => {
            error!("Invalid stock code in config: {}", e);
            return;
        }
    };

    let clock = SystemClock;
    let classifier = TrendClassifier::new(config.ruleset);

    info!("🔮 hexatrend started (code {})", code.as_str());

    let stdin = BufReader::new(tokio::io::stdin());
    let mut lines = stdin.lines();
    let mut stdin_open = true;

    // Main rendering loop: one derivation pass per iteration, then wait for
    // the refresh timer or a manual refresh (any line on stdin).
    loop {
        render_once(&clock, &code, &config, &classifier);

        info!(
            "Waiting for timer ({}s) or manual refresh...",
            config.refresh_interval_seconds
        );
        tokio::select! {
            _ = sleep(Duration::from_secs(config.refresh_interval_seconds)) => {
                info!("Timer triggered.");
            }
            line = lines.next_line(), if stdin_open => {
                match line {
                    Ok(Some(_)) => info!("Manual refresh triggered."),
                    _ => {
                        info!("Stdin closed; refreshing on timer only.");
                        stdin_open = false;
                    }
                }
            }
        }
    }
}

/// One full derivation pass. The clock is sampled exactly once and reused for
/// every derived value, so upper, lower and change line never come from
/// inconsistent instants.
fn render_once(clock: &dyn Clock, code: &CodeSample, config: &AppConfig, classifier: &TrendClassifier) {
    let sample = clock::sample(clock);

    let sector_pair = cast_time_hexagram(&sample, config.change_line_strategy);
    let sector = classifier.classify(&sector_pair);

    let instrument_pair = cast_code_hexagram(
        code,
        &sample,
        config.code_seed_strategy,
        config.change_line_strategy,
    );
    let instrument = classifier.classify(&instrument_pair);

    let strength = compare_strength(&sector, &instrument);
    info!(
        "Sector {}/{} scored {}; instrument {}/{} scored {}",
        sector_pair.upper, sector_pair.lower, sector.score,
        instrument_pair.upper, instrument_pair.lower, instrument.score
    );

    let report = renderer::render_report(
        &sample,
        (&sector_pair, &sector),
        code.as_str(),
        (&instrument_pair, &instrument),
        strength,
    );
    println!("{report}");
}

// Text renderer: all presentation concerns live here, the core stays
// color-free and layout-free.

use crate::model::{Interpretation, RelativeStrength, Sentiment, TimeSample, TrigramPair};

/// Display names for the eight trigrams.
pub fn trigram_name(trigram: u8) -> &'static str {
    match trigram {
        1 => "Qian (Heaven)",
        2 => "Dui (Lake)",
        3 => "Li (Fire)",
        4 => "Zhen (Thunder)",
        5 => "Xun (Wind)",
        6 => "Kan (Water)",
        7 => "Gen (Mountain)",
        _ => "Kun (Earth)",
    }
}

/// Maps the closed sentiment enum to a display color word. Comparison
/// readings keep their original blue badge; other neutrals render grey.
pub fn color_word(interp: &Interpretation) -> &'static str {
    match interp.sentiment {
        Sentiment::Bullish => "red",
        Sentiment::Bearish => "green",
        Sentiment::Neutral if interp.label.starts_with("Comparison") => "blue",
        Sentiment::Neutral => "grey",
    }
}

fn strength_line(strength: RelativeStrength) -> &'static str {
    match strength {
        RelativeStrength::Leading => "📈 Instrument leads its sector.",
        RelativeStrength::Lagging => "📉 Instrument lags its sector.",
        RelativeStrength::Synchronized => "🔁 Instrument and sector move together.",
    }
}

/// Renders one captioned reading block.
pub fn render_reading(caption: &str, pair: &TrigramPair, interp: &Interpretation) -> String {
    let change = match pair.change_line {
        Some(line) => format!("line {}", line),
        None => "none".to_string(),
    };
    format!(
        "{caption}\n  ☰ Upper: {} [{}]\n  ☰ Lower: {} [{}]\n  Change: {}\n  Reading: {} ({}, score {})\n  {}\n  💡 {}",
        pair.upper,
        trigram_name(pair.upper),
        pair.lower,
        trigram_name(pair.lower),
        change,
        interp.label,
        color_word(interp),
        interp.score,
        interp.commentary,
        interp.advice,
    )
}

/// Renders the full report: timestamp header, sector reading, instrument
/// reading, relative-strength footer.
pub fn render_report(
    sample: &TimeSample,
    sector: (&TrigramPair, &Interpretation),
    code: &str,
    instrument: (&TrigramPair, &Interpretation),
    strength: RelativeStrength,
) -> String {
    format!(
        "🔮 Hexagram tape reading\n📅 Beijing time: {:04}-{:02}-{:02} {:02}:{:02}\n\n{}\n\n{}\n\n{}",
        sample.year,
        sample.month,
        sample.day,
        sample.hour % 24,
        sample.minute,
        render_reading("🧭 Sector (time casting)", sector.0, sector.1),
        render_reading(&format!("🏷 Instrument {} (code casting)", code), instrument.0, instrument.1),
        strength_line(strength),
    )
}

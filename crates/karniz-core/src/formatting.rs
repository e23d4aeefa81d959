//! Message text builders. Pure string code, no transport in sight.

use crate::calc::{calc, Calculation, Mode};

/// Control lengths used by the `/test` diagnostic. Kept as a living
/// regression fixture: the rendered report was verified against real
/// installations.
pub const REFERENCE_LENGTHS: [f64; 6] = [202.0, 289.0, 404.0, 510.0, 550.0, 653.0];

/// Render a centimeter value the way a human writes it: one decimal at
/// most, trailing `.0` dropped ("404", "404.5", "194.4").
pub fn format_cm(v: f64) -> String {
    let r = (v * 10.0).round() / 10.0;
    if r == r.trunc() {
        format!("{}", r.trunc() as i64)
    } else {
        format!("{r:.1}")
    }
}

/// Segment layout line: N repetitions of the per-segment length.
pub fn format_scheme(s: f64, n: u64) -> String {
    let piece = format!("{} см", format_cm(s));
    vec![piece; n as usize].join("   ")
}

/// The result card sent after a successful calculation.
pub fn format_result(c: &Calculation) -> String {
    format!(
        "✅ Результат\n\
         Режим: {mode}\n\
         Длина карниза X: {x} см\n\
         \n\
         Схема: {scheme}\n\
         Рабочая длина L: {l} см\n\
         \n\
         Бегунков: {runners} шт.\n\
         Крючков: {hooks} шт.\n\
         Креплений: {mounts} шт.",
        mode = c.mode.label(),
        x = format_cm(c.x),
        scheme = format_scheme(c.segment_length, c.segments),
        l = format_cm(c.working_length),
        runners = c.runners,
        hooks = c.hooks,
        mounts = c.mounts,
    )
}

/// Self-check report over the control lengths, both modes.
pub fn format_reference_report() -> String {
    let mut lines = vec!["🧪 Тест (контрольные значения):".to_string()];

    for x in REFERENCE_LENGTHS {
        let c = calc(Mode::Center, x);
        let lr = calc(Mode::LeftRight, x);
        lines.push(format!(
            "\nX={} см | Бегунки {} | Крючки {} | Крепления {}",
            format_cm(x),
            c.runners,
            c.hooks,
            c.mounts
        ));
        lines.push(format!(
            "  К центру:  {}  (L={})",
            format_scheme(c.segment_length, c.segments),
            format_cm(c.working_length)
        ));
        lines.push(format!(
            "  Слева→Напр: {}  (L={})",
            format_scheme(lr.segment_length, lr.segments),
            format_cm(lr.working_length)
        ));
    }

    lines.join("\n")
}

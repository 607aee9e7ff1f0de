/// Similar to `info!` macro in tracing, but writes to stderr so log lines
/// never mix with the report lines on stdout.
/// You can pass in a starting time and it will also report the elapsed time.
/// ```
/// use pagesift::info_time;
///
/// info_time!("str {}, {}", 1, 2);
/// let time = chrono::Local::now();
/// info_time!(time, "str {}, {}", 1, 2);
/// ```
#[macro_export]
macro_rules! info_time {
    ($strfm:literal $(,)? $($arg:expr),*) => {{
        let local_now = ::chrono::Local::now();
        eprintln!("{:<30} : {}", local_now, format!($strfm, $($arg),*));
    }};
    ($time:expr, $strfm:literal $(,)? $($arg:expr),*) => {{
        let local_now = ::chrono::Local::now();
        let run_time = (local_now - $time)
                .num_microseconds()
                .map(|n| n as f64 / 1_000_000.0)
                .unwrap_or(0.0);
        eprintln!(
            "{:<30} : {} [{:.3} sec]",
            local_now,
            format!($strfm, $($arg),*),
            run_time
        );
    }};
}

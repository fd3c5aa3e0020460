use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt::{self, format::FmtSpan}};

fn default_directive(verbose: bool) -> &'static str {
    if verbose { "eyedropper_rs=debug,info" } else { "info" }
}

fn span_events(filter: &EnvFilter) -> FmtSpan {
    // Stage timings only matter when someone is debugging
    if filter.to_string().contains("debug") {
        FmtSpan::CLOSE
    } else {
        FmtSpan::NONE
    }
}

pub fn init(verbose: bool) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_timer(fmt::time::uptime())
        .with_span_events(span_events(&env_filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbose_enables_crate_debug() {
        let filter = EnvFilter::new(default_directive(true));
        assert_eq!(span_events(&filter), FmtSpan::CLOSE);
    }

    #[test]
    fn test_quiet_default_has_no_span_events() {
        let filter = EnvFilter::new(default_directive(false));
        assert_eq!(span_events(&filter), FmtSpan::NONE);
    }
}

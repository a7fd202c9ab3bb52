//! Optional per-rule execution tracing, gated behind the `debug` Cargo feature.
//!
//! Grounded directly in the teacher crate's `src/trace/mod.rs`: a `trace(name, parser)` wrapper
//! that records enter/exit/result lines including depth, and is a no-op pass-through when the
//! feature is off. Unlike the Python original's `pegasus.rules.DEBUG` process-global, this crate
//! keeps the depth counter as an implementation detail of this module rather than something a
//! caller can set process-wide — see spec §9/§12's resolved open question about scoping the
//! toggle away from global mutable state.

use crate::rule::Rule;

/// Wraps `inner` so every resume prints an enter/exit/outcome trace line tagged `name`, when the
/// `debug` feature is enabled. Without the feature this is a transparent pass-through, exactly
/// like the teacher's `trace()` compiling down to `move |i| parser.parse_next(i)`.
#[cfg_attr(not(feature = "debug"), allow(unused_variables))]
pub fn traced(name: &'static str, inner: Box<dyn Rule>) -> Box<dyn Rule> {
    #[cfg(feature = "debug")]
    {
        Box::new(internals::Traced { name, inner })
    }
    #[cfg(not(feature = "debug"))]
    {
        inner
    }
}

#[cfg(feature = "debug")]
mod internals {
    use std::io::Write;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use crate::rule::{Char, Rule, RuleResult};

    static DEPTH: AtomicUsize = AtomicUsize::new(0);

    struct Depth(usize);

    impl Depth {
        fn enter() -> Self {
            Depth(DEPTH.fetch_add(1, Ordering::SeqCst))
        }
    }

    impl Drop for Depth {
        fn drop(&mut self) {
            DEPTH.fetch_sub(1, Ordering::SeqCst);
        }
    }

    fn render_char(c: Char) -> crate::lib::String {
        match c {
            Char::Scalar(c) => crate::lib::format!("{c:?}"),
            Char::Eof => crate::lib::String::from("<EOF>"),
        }
    }

    pub(super) struct Traced {
        pub(super) name: &'static str,
        pub(super) inner: Box<dyn Rule>,
    }

    impl Rule for Traced {
        fn resume(&mut self, current: Char) -> RuleResult {
            let depth = Depth::enter();
            let gutter = anstyle::Style::new().bold();
            let input_style = anstyle::Style::new().underline();

            let writer = anstream::stderr();
            let mut w = writer.lock();
            let _ = writeln!(
                w,
                "ruleco: {:depth$}{gutter}>{greset} {name} {istyle}{ch}{ireset}",
                "",
                depth = depth.0,
                gutter = gutter.render(),
                greset = gutter.render_reset(),
                name = self.name,
                istyle = input_style.render(),
                ch = render_char(current),
                ireset = input_style.render_reset(),
            );
            drop(w);

            let outcome = self.inner.resume(current);

            let (status_style, status) = match &outcome {
                RuleResult::Pending { reconsume } => (
                    anstyle::Style::new().fg_color(Some(anstyle::AnsiColor::Yellow.into())),
                    if *reconsume {
                        crate::lib::String::from("pending (reconsume)")
                    } else {
                        crate::lib::String::from("pending")
                    },
                ),
                RuleResult::Success { reconsume, .. } => (
                    anstyle::Style::new().fg_color(Some(anstyle::AnsiColor::Green.into())),
                    if *reconsume {
                        crate::lib::String::from("success (reconsume)")
                    } else {
                        crate::lib::String::from("success")
                    },
                ),
                RuleResult::Failure(e) => (
                    anstyle::Style::new().fg_color(Some(anstyle::AnsiColor::Red.into())),
                    crate::lib::format!("failure: {e}"),
                ),
                RuleResult::Fatal(e) => (
                    anstyle::Style::new()
                        .fg_color(Some(anstyle::AnsiColor::Magenta.into()))
                        .bold(),
                    crate::lib::format!("fatal: {e}"),
                ),
            };

            let writer = anstream::stderr();
            let mut w = writer.lock();
            let _ = writeln!(
                w,
                "ruleco: {:depth$}{status_style}<{sreset} {name} {status_style}{status}{sreset}",
                "",
                depth = depth.0,
                status_style = status_style.render(),
                sreset = status_style.render_reset(),
                name = self.name,
                status = status,
            );

            outcome
        }
    }
}

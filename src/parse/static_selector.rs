use scraper::Selector;

/// Compiles a selector known at build time. Panics on invalid CSS, which is a programming error.
pub(super) fn compile(css: &str) -> Selector {
    match Selector::parse(css) {
        Ok(sel) => sel,
        Err(e) => panic!("Error parsing static selector {css}: {e:?}"),
    }
}

/// Declares a lazily compiled `static` selector.
#[macro_export]
macro_rules! static_selector {
    ($x: ident <- $sel: literal) => {
        static $x: std::sync::LazyLock<scraper::Selector> =
            std::sync::LazyLock::new(|| $crate::parse::static_selector::compile($sel));
    };
}

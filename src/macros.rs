/// Compile a regex literal once and hand out a `&'static Regex`.
#[macro_export]
macro_rules! regex {
    ($pat:literal) => {{
        static RE: once_cell::sync::Lazy<regex::Regex> =
            once_cell::sync::Lazy::new(|| regex::Regex::new($pat).unwrap());
        &*RE
    }};
}

/// Build a lazily initialised surface-form lookup table.
///
/// ```ignore
/// vocabulary! {
///     pub(crate) static MONTHS: Month = {
///         Month::Jan => ["jan", "january"],
///     };
/// }
/// ```
#[macro_export]
macro_rules! vocabulary {
    (
        $(#[$meta:meta])*
        $vis:vis static $name:ident : $ty:ty = {
            $( $value:expr => [ $($word:literal),+ $(,)? ] ),+ $(,)?
        };
    ) => {
        $(#[$meta])*
        $vis static $name: once_cell::sync::Lazy<std::collections::HashMap<&'static str, $ty>> =
            once_cell::sync::Lazy::new(|| {
                let mut map = std::collections::HashMap::new();
                $( $( map.insert($word, $value); )+ )+
                map
            });
    };
}

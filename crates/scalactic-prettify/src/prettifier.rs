//! Prettifier - renders values as diagnostic strings
//!
//! Rendering recurses through a `Renderer`, which counts nesting depth. Past
//! `max_depth` a value is rendered in its shallow form instead, so
//! self-referential structures terminate.

use crate::PrettifierConfig;

/// A value with a diagnostic rendering.
pub trait Prettify {
    /// Structural rendering. Nested values go through `out.nested`.
    fn render(&self, out: &mut Renderer<'_>) -> String;

    /// Rendering used once the depth bound is reached. Must not recurse.
    fn shallow(&self) -> String {
        format!("<{}>", short_type_name(std::any::type_name::<Self>()))
    }
}

/// Rendering state for one top-level call.
pub struct Renderer<'a> {
    config: &'a PrettifierConfig,
    depth: usize,
    bound_hit: bool,
}

impl<'a> Renderer<'a> {
    pub fn new(config: &'a PrettifierConfig) -> Self {
        Renderer {
            config,
            depth: 0,
            bound_hit: false,
        }
    }

    pub fn config(&self) -> &PrettifierConfig {
        self.config
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Whether any value fell back to its shallow form.
    pub fn bound_hit(&self) -> bool {
        self.bound_hit
    }

    /// Render a nested value one level deeper.
    pub fn nested<P: Prettify + ?Sized>(&mut self, value: &P) -> String {
        if self.depth >= self.config.max_depth {
            if !self.bound_hit {
                tracing::warn!(
                    max_depth = self.config.max_depth,
                    "prettifier depth bound reached, falling back to shallow form"
                );
                self.bound_hit = true;
            }
            return value.shallow();
        }
        self.depth += 1;
        let rendered = value.render(self);
        self.depth -= 1;
        rendered
    }

    /// A string, quoted when the config asks for it.
    pub fn string(&self, s: &str) -> String {
        if self.config.quote_strings {
            format!("\"{s}\"")
        } else {
            s.to_string()
        }
    }

    pub fn char(&self, c: char) -> String {
        if self.config.quote_strings {
            format!("'{c}'")
        } else {
            c.to_string()
        }
    }

    /// `Name(a, b, c)`, truncated per `size_limit`.
    pub fn sequence<'v, P, I>(&mut self, name: &str, items: I) -> String
    where
        P: Prettify + ?Sized + 'v,
        I: IntoIterator<Item = &'v P>,
    {
        let parts = self.limited(items, |out, item| out.nested(item));
        format!("{name}({})", parts.join(", "))
    }

    /// `Name(k -> v, ...)`, truncated per `size_limit`.
    pub fn entries<'v, K, V, I>(&mut self, name: &str, entries: I) -> String
    where
        K: Prettify + ?Sized + 'v,
        V: Prettify + ?Sized + 'v,
        I: IntoIterator<Item = (&'v K, &'v V)>,
    {
        let parts = self.limited(entries, |out, (k, v)| {
            format!("{} -> {}", out.nested(k), out.nested(v))
        });
        format!("{name}({})", parts.join(", "))
    }

    /// `Name(inner)` for single-slot wrappers such as `Some` or `Good`.
    pub fn wrapped<P: Prettify + ?Sized>(&mut self, name: &str, inner: &P) -> String {
        format!("{name}({})", self.nested(inner))
    }

    fn limited<X, I, F>(&mut self, items: I, mut render: F) -> Vec<String>
    where
        I: IntoIterator<Item = X>,
        F: FnMut(&mut Self, X) -> String,
    {
        let limit = self.config.size_limit;
        let mut parts = Vec::new();
        for (i, item) in items.into_iter().enumerate() {
            if limit.is_some_and(|l| i >= l) {
                parts.push("...".to_string());
                break;
            }
            parts.push(render(self, item));
        }
        parts
    }
}

/// Entry point holding a configuration.
#[derive(Clone, Debug, Default)]
pub struct Prettifier {
    config: PrettifierConfig,
}

impl Prettifier {
    pub fn new(config: PrettifierConfig) -> Self {
        Prettifier { config }
    }

    pub fn basic() -> Self {
        Prettifier::new(PrettifierConfig::basic())
    }

    pub fn truncated(limit: usize) -> Self {
        Prettifier::new(PrettifierConfig::truncated(limit))
    }

    pub fn config(&self) -> &PrettifierConfig {
        &self.config
    }

    pub fn apply<P: Prettify + ?Sized>(&self, value: &P) -> String {
        Renderer::new(&self.config).nested(value)
    }
}

/// Render with the default configuration.
///
/// ```rust
/// use scalactic_prettify::pretty;
///
/// assert_eq!(pretty(&Some("hi")), "Some(\"hi\")");
/// assert_eq!(pretty(&vec![1, 2]), "Vec(1, 2)");
/// ```
pub fn pretty<P: Prettify + ?Sized>(value: &P) -> String {
    Prettifier::default().apply(value)
}

/// Drops module paths: `alloc::rc::Rc<my::Node>` becomes `Rc<Node>`.
fn short_type_name(full: &str) -> String {
    let mut out = String::with_capacity(full.len());
    let mut segment = String::new();
    for c in full.chars() {
        if c.is_alphanumeric() || c == '_' || c == ':' {
            segment.push(c);
        } else {
            out.push_str(segment.rsplit("::").next().unwrap_or(""));
            segment.clear();
            out.push(c);
        }
    }
    out.push_str(segment.rsplit("::").next().unwrap_or(""));
    out
}

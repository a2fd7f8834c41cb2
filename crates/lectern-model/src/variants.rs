use lectern_common::error::LecternError;
use lectern_common::types::Result;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// A pure transform folding a block's governing property into its type name.
pub type VariantRule = fn(&HashMap<String, String>) -> Result<String>;

/// Block families whose renderable identity is carried by a single property
/// rather than a variant suffix. Matching a rule replaces the block type
/// entirely; the caller must discard any property-derived variant string.
static SPECIAL_VARIANTS: Lazy<HashMap<&'static str, VariantRule>> = Lazy::new(|| {
    let mut rules: HashMap<&'static str, VariantRule> = HashMap::new();
    rules.insert("stained_glass", |properties| {
        let color = governing_property(properties, "color", "stained_glass")?;
        Ok(format!("{}_stained_glass", color))
    });
    rules.insert("planks", |properties| {
        let variant = governing_property(properties, "variant", "planks")?;
        Ok(format!("{}_planks", variant))
    });
    rules
});

fn governing_property<'a>(
    properties: &'a HashMap<String, String>,
    key: &str,
    family: &str,
) -> Result<&'a str> {
    properties.get(key).map(String::as_str).ok_or_else(|| {
        LecternError::InvalidShape(format!("{} entry has no {} property", family, key))
    })
}

/// Looks up the special-variant rule for an unqualified block type, if any.
pub fn special_variant(block_type: &str) -> Option<VariantRule> {
    SPECIAL_VARIANTS.get(block_type).copied()
}

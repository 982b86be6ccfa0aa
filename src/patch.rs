//! Assembles a ModuleManager patch document from a run configuration.

use crate::builder::IndentedTextBuilder;
use crate::resources::{KERBIN_DAY_LENGTH, Resource};

const INDENT: &str = "    ";

/// Inputs for one patch document.
pub struct PatchConfig<'a> {
    /// Name of the part to patch.
    pub part: &'a str,
    /// Number of Kerbals to supply.
    pub crew: i64,
    /// Supply duration in days.
    pub days: f64,
    /// Length of a day in hours.
    pub day_length: f64,
    /// Optional ModuleManager `:FOR[...]` mod name.
    pub for_mod: Option<&'a str>,
    /// Resources to emit, in table order.
    pub resources: &'a [Resource],
}

/// Render the full patch: one `@PART` directive wrapping one `%RESOURCE`
/// block per requested resource.
pub fn render_patch(cfg: &PatchConfig) -> String {
    let day_length_multiplier = cfg.day_length / KERBIN_DAY_LENGTH;

    let mut builder = IndentedTextBuilder::new(INDENT);
    builder.append(&format!("@PART[{}]:NEEDS[TacLifeSupport]", cfg.part));
    if let Some(mod_name) = cfg.for_mod {
        builder.append(&format!(":FOR[{mod_name}]"));
    }
    builder.newline();
    builder.block(|b| {
        for &resource in cfg.resources {
            let max_amount =
                resource.daily_consumption() * cfg.crew as f64 * cfg.days * day_length_multiplier;
            resource_definition(b, resource, max_amount);
        }
    });
    builder.build()
}

/// Emit one `%RESOURCE` block. Consumables start filled to `max_amount`,
/// byproducts start at zero.
fn resource_definition(builder: &mut IndentedTextBuilder, resource: Resource, max_amount: f64) {
    let amount = if resource.filled_at_start() {
        max_amount
    } else {
        0.0
    };
    builder.append_line(&format!("%RESOURCE[{}]", resource.name()));
    let amount_line = format!("%amount = {amount:.4}");
    let max_line = format!("%maxAmount = {max_amount:.4}");
    builder.block(|b| b.append_lines([amount_line.as_str(), max_line.as_str()]));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config<'a>(resources: &'a [Resource]) -> PatchConfig<'a> {
        PatchConfig {
            part: "Mk1Pod",
            crew: 1,
            days: 1.0,
            day_length: KERBIN_DAY_LENGTH,
            for_mod: None,
            resources,
        }
    }

    #[test]
    fn one_kerbal_one_day_emits_all_six_resources() {
        let text = render_patch(&base_config(&Resource::ALL));
        let expected = "\
@PART[Mk1Pod]:NEEDS[TacLifeSupport]
{
    %RESOURCE[Food]
    {
        %amount = 0.3656
        %maxAmount = 0.3656
    }
    %RESOURCE[Water]
    {
        %amount = 0.2417
        %maxAmount = 0.2417
    }
    %RESOURCE[Oxygen]
    {
        %amount = 37.0124
        %maxAmount = 37.0124
    }
    %RESOURCE[CarbonDioxide]
    {
        %amount = 0.0000
        %maxAmount = 31.9798
    }
    %RESOURCE[WasteWater]
    {
        %amount = 0.0000
        %maxAmount = 0.3078
    }
    %RESOURCE[Waste]
    {
        %amount = 0.0000
        %maxAmount = 0.0333
    }
}
";
        assert_eq!(text, expected);
    }

    #[test]
    fn day_length_rescales_amounts() {
        // 24h day over a 6h reference day quadruples every quantity
        let mut cfg = base_config(&Resource::ALL);
        cfg.crew = 2;
        cfg.days = 5.0;
        cfg.day_length = 24.0;
        let text = render_patch(&cfg);
        assert!(
            text.contains("%maxAmount = 14.6250"),
            "Food should scale to 0.365625 * 2 * 5 * 4: {text}"
        );
        assert!(text.contains("%maxAmount = 9.6665"), "Water: {text}");
    }

    #[test]
    fn default_day_length_is_identity() {
        let explicit = render_patch(&PatchConfig {
            day_length: 6.0,
            ..base_config(&Resource::ALL)
        });
        let default = render_patch(&base_config(&Resource::ALL));
        assert_eq!(explicit, default);
    }

    #[test]
    fn for_mod_clause_sits_between_needs_and_brace() {
        let mut cfg = base_config(&Resource::ALL);
        cfg.for_mod = Some("RO");
        let text = render_patch(&cfg);
        assert!(
            text.starts_with("@PART[Mk1Pod]:NEEDS[TacLifeSupport]:FOR[RO]\n{\n"),
            "unexpected header: {text}"
        );
    }

    #[test]
    fn consumables_start_filled_byproducts_start_empty() {
        let text = render_patch(&base_config(&Resource::ALL));
        for block in text.split("%RESOURCE[").skip(1) {
            let filled = block.starts_with("Food")
                || block.starts_with("Water")
                || block.starts_with("Oxygen");
            let amount = field(block, "%amount = ");
            let max_amount = field(block, "%maxAmount = ");
            if filled {
                assert_eq!(amount, max_amount, "consumable should start full: {block}");
            } else {
                assert_eq!(amount, "0.0000", "byproduct should start empty: {block}");
            }
        }
    }

    #[test]
    fn subset_renders_only_requested_resources() {
        let subset = [Resource::Water, Resource::Waste];
        let text = render_patch(&base_config(&subset));
        assert!(text.contains("%RESOURCE[Water]"));
        assert!(text.contains("%RESOURCE[Waste]"));
        assert!(!text.contains("%RESOURCE[Food]"));
        assert!(!text.contains("%RESOURCE[Oxygen]"));
    }

    #[test]
    fn zero_crew_yields_zero_amounts() {
        let mut cfg = base_config(&Resource::ALL);
        cfg.crew = 0;
        let text = render_patch(&cfg);
        assert!(text.contains("%maxAmount = 0.0000"));
        assert!(!text.contains("%maxAmount = 0.3656"));
    }

    fn field<'a>(block: &'a str, key: &str) -> &'a str {
        let start = block.find(key).map(|i| i + key.len()).unwrap_or(0);
        let rest = &block[start..];
        rest.split_whitespace().next().unwrap_or("")
    }
}

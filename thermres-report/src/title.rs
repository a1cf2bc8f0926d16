//! Chart labels
//!
//! The title packs the circuit into one line:
//! `Thermistor NTCLE100E3103: R_T=10.0kΩ; R_r=10.0kΩ; B=3977K`

use thermres_core::CircuitParams;

/// X axis label
pub const X_LABEL: &str = "Temperature (°C)";

/// Y axis label
pub const Y_LABEL: &str = "Resolution (°C)";

/// One-line description of the circuit for chart titles and exports
pub fn plot_title(params: &CircuitParams) -> String {
    let name = if params.part_number.is_empty() {
        "Thermistor".to_string()
    } else {
        format!("Thermistor {}", params.part_number)
    };

    format!(
        "{}: R_T={:.1}kΩ; R_r={:.1}kΩ; B={}K",
        name,
        params.r_nominal / 1000.0,
        params.r_ref / 1000.0,
        params.beta
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_without_part_number() {
        let params = CircuitParams::new(10_000.0, 3950.0, 10_000.0);
        assert_eq!(plot_title(&params), "Thermistor: R_T=10.0kΩ; R_r=10.0kΩ; B=3950K");
    }

    #[test]
    fn title_with_part_number() {
        let params = CircuitParams::new(4_700.0, 3977.5, 12_345.0).with_part_number("B57164K472");
        assert_eq!(
            plot_title(&params),
            "Thermistor B57164K472: R_T=4.7kΩ; R_r=12.3kΩ; B=3977.5K"
        );
    }
}

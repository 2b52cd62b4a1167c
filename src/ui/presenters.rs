use crate::io::OutputWriter;
use crate::models::coordinate::Coordinate;
use crate::models::torpedo_result::TorpedoResult;
use crate::services::combat::Targetable;

pub struct FleetPresenter;

impl FleetPresenter {
    /// One line per entity: its name followed by every occupied cell.
    pub fn show_occupancy(name: &str, entity: &dyn Targetable, output: &mut dyn OutputWriter) {
        let cells: Vec<String> = entity.occupancy().iter().map(|c| c.to_string()).collect();
        output.writeln(&format!("{:<18}{}", name, cells.join(" ")));
    }
}

pub struct CombatPresenter;

impl CombatPresenter {
    pub fn show_torpedo(
        attacker: &str,
        target: &str,
        at: Coordinate,
        result: TorpedoResult,
        output: &mut dyn OutputWriter,
    ) {
        output.writeln(&format!("{} FIRES AT {} SECTOR {}", attacker, target, at));
        output.writeln(&format!("   {}", result.message()));
    }

    pub fn show_error(name: &str, error: &dyn std::error::Error, output: &mut dyn OutputWriter) {
        output.writeln(&format!("*** {} COULD NOT DEPLOY: {}", name, error));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::test_utils::MockOutput;
    use crate::models::battleship::Battleship;
    use crate::models::coordinate::Orientation;
    use crate::models::errors::FleetError;
    use crate::services::combat::Deployable;

    #[test]
    fn occupancy_lists_every_cell() {
        let ship = Battleship::deploy(Coordinate::new(2, 1), Orientation::Vertical, 3).unwrap();
        let mut output = MockOutput::new();

        FleetPresenter::show_occupancy("ALPHA", &ship, &mut output);

        assert_eq!(output.messages.len(), 1);
        assert!(output.messages[0].starts_with("ALPHA"));
        assert!(output.messages[0].ends_with("(2,1) (2,2) (2,3)"));
    }

    #[test]
    fn torpedo_report_carries_result_message() {
        let mut output = MockOutput::new();

        CombatPresenter::show_torpedo("ALPHA", "BRAVO", Coordinate::new(0, 2), TorpedoResult::Miss, &mut output);

        assert_eq!(output.messages, vec![
            "ALPHA FIRES AT BRAVO SECTOR (0,2)".to_string(),
            "   Miss!".to_string(),
        ]);
    }

    #[test]
    fn error_report_names_entity() {
        let mut output = MockOutput::new();

        CombatPresenter::show_error("DELTA", &FleetError::InvalidLength { length: 0 }, &mut output);

        assert!(output.messages[0].contains("DELTA"));
        assert!(output.messages[0].contains("Invalid length 0"));
    }
}

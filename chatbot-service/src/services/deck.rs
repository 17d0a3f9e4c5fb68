//! Deck estimation calculators.

use crate::dtos::deck::{
    MaterialsEstimate, MaterialsRequest, SkirtingEstimate, SkirtingMaterial, SkirtingRequest,
};

/// Square feet of deck surface one skirting panel covers.
const SKIRTING_PANEL_COVERAGE_SQFT: f64 = 32.0;

const SKIRTING_TIP: &str = "Always round up and order 1-2 extra panels for cutting and waste.";

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Board count for a rectangular deck, with waste allowance rounded up.
pub fn estimate_materials(request: &MaterialsRequest) -> MaterialsEstimate {
    let board_width_in = request.board_width_in.unwrap_or(5.5);
    let board_length_ft = request.board_length_ft.unwrap_or(16.0);
    let waste_percent = request.waste_percent.unwrap_or(10.0);

    let deck_area = request.length_ft * request.width_ft;
    let board_area = (board_width_in / 12.0) * board_length_ft;
    let boards = ((deck_area / board_area) * (1.0 + waste_percent / 100.0)).ceil() as u32;

    MaterialsEstimate {
        deck_area_sqft: round2(deck_area),
        board_area_sqft: round2(board_area),
        boards,
    }
}

/// Skirting perimeter, panel count and a material note.
///
/// A three-sided deck has one long side against the house.
pub fn estimate_skirting(request: &SkirtingRequest) -> SkirtingEstimate {
    let sides = request.sides.unwrap_or(4);

    let perimeter = if sides == 4 {
        2.0 * (request.length_ft + request.width_ft)
    } else {
        2.0 * request.width_ft + request.length_ft
    };

    let area = perimeter * request.height_ft;
    let panels_needed = (area / SKIRTING_PANEL_COVERAGE_SQFT).ceil() as u32;

    let note = request.material.map(|material| match material {
        SkirtingMaterial::Composite => {
            "Composite skirting is durable but heavier; framing may be required.".to_string()
        }
        SkirtingMaterial::Pvc => {
            "PVC skirting is lightweight and rot-proof, ideal for wet areas.".to_string()
        }
        SkirtingMaterial::MineralBoard => {
            "Mineral Board is highly fire- and insect-resistant, great for premium projects."
                .to_string()
        }
    });

    SkirtingEstimate {
        perimeter_ft: round2(perimeter),
        skirting_area_sqft: round2(area),
        panels_needed,
        material: request.material,
        tip: SKIRTING_TIP.to_string(),
        note,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn materials_request(length_ft: f64, width_ft: f64) -> MaterialsRequest {
        MaterialsRequest {
            length_ft,
            width_ft,
            board_width_in: None,
            board_length_ft: None,
            waste_percent: None,
        }
    }

    #[test]
    fn materials_use_default_board_and_waste() {
        let estimate = estimate_materials(&materials_request(16.0, 12.0));
        // 192 sqft deck, 7.33 sqft boards, 10% waste => ceil(28.8) = 29
        assert_eq!(estimate.deck_area_sqft, 192.0);
        assert_eq!(estimate.board_area_sqft, 7.33);
        assert_eq!(estimate.boards, 29);
    }

    #[test]
    fn materials_round_board_count_up() {
        let mut request = materials_request(10.0, 10.0);
        request.waste_percent = Some(0.0);
        request.board_width_in = Some(6.0);
        request.board_length_ft = Some(10.0);
        // 100 / 5 = 20 exactly, no rounding up expected
        assert_eq!(estimate_materials(&request).boards, 20);

        request.waste_percent = Some(1.0);
        assert_eq!(estimate_materials(&request).boards, 21);
    }

    #[test]
    fn skirting_four_sides() {
        let request = SkirtingRequest {
            length_ft: 16.0,
            width_ft: 12.0,
            height_ft: 2.0,
            sides: None,
            material: Some(SkirtingMaterial::Pvc),
        };
        let estimate = estimate_skirting(&request);
        assert_eq!(estimate.perimeter_ft, 56.0);
        assert_eq!(estimate.skirting_area_sqft, 112.0);
        assert_eq!(estimate.panels_needed, 4);
        assert!(estimate.note.unwrap().contains("PVC"));
    }

    #[test]
    fn skirting_three_sides_skips_the_house_wall() {
        let request = SkirtingRequest {
            length_ft: 16.0,
            width_ft: 12.0,
            height_ft: 2.0,
            sides: Some(3),
            material: None,
        };
        let estimate = estimate_skirting(&request);
        assert_eq!(estimate.perimeter_ft, 40.0);
        assert!(estimate.note.is_none());
    }
}

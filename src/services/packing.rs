use crate::domain::constants::{
    DOCUMENTS_ITEM, FIRST_AID_ITEM, FLASHLIGHT_ITEM, MEALS_PER_PERSON, MIN_MEALS,
    MIN_WATER_GALLONS, PET_SUPPLIES_ITEM, WATER_GALLONS_PER_PERSON,
};

/// Checklist in display order: water, meals, flashlight, first aid, documents, then pets.
pub fn generate_packing_list(family_size: u32, has_pets: bool) -> Vec<String> {
    let water_gallons = WATER_GALLONS_PER_PERSON
        .saturating_mul(family_size)
        .max(MIN_WATER_GALLONS);
    let meals = MEALS_PER_PERSON.saturating_mul(family_size).max(MIN_MEALS);

    let mut items = vec![
        format!("{} gallons of water", water_gallons),
        format!("{} non-perishable meals (canned food, granola, etc.)", meals),
        FLASHLIGHT_ITEM.to_string(),
        FIRST_AID_ITEM.to_string(),
        DOCUMENTS_ITEM.to_string(),
    ];
    if has_pets {
        items.push(PET_SUPPLIES_ITEM.to_string());
    }
    items
}

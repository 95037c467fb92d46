//! Tests for dish name classification.

use foodco2::dish::identify_dish_type;
use foodco2::models::DishType;

#[test]
fn test_format_words() {
    assert_eq!(identify_dish_type("Kasviskeitto"), DishType::Soup);
    assert_eq!(identify_dish_type("Tomato soup"), DishType::Soup);
    assert_eq!(identify_dish_type("Makaronilaatikko"), DishType::Casserole);
    assert_eq!(identify_dish_type("Lohikiusaus"), DishType::Casserole);
    assert_eq!(identify_dish_type("Potato gratin"), DishType::Casserole);
    assert_eq!(identify_dish_type("Kreikkalainen salaatti"), DishType::Salad);
    assert_eq!(identify_dish_type("Caesar salad"), DishType::Salad);
    assert_eq!(identify_dish_type("Pasta carbonara"), DishType::PastaDish);
    assert_eq!(identify_dish_type("Spagetti bolognese"), DishType::PastaDish);
}

#[test]
fn test_protein_words() {
    assert_eq!(identify_dish_type("Naudanlihapata"), DishType::MeatMain);
    assert_eq!(identify_dish_type("Pippuripihvi"), DishType::MeatMain);
    assert_eq!(identify_dish_type("Roast beef"), DishType::MeatMain);
    assert_eq!(identify_dish_type("Paistettu kala"), DishType::FishMain);
    assert_eq!(identify_dish_type("Uunilohi"), DishType::FishMain);
    assert_eq!(identify_dish_type("Fish and chips"), DishType::FishMain);
    assert_eq!(identify_dish_type("Broilerikastike"), DishType::PoultryMain);
    assert_eq!(identify_dish_type("Kalkkunaleike"), DishType::PoultryMain);
    assert_eq!(identify_dish_type("Chicken curry"), DishType::PoultryMain);
    assert_eq!(identify_dish_type("Tofuwok"), DishType::VegetarianMain);
    assert_eq!(identify_dish_type("Kikhernecurry"), DishType::VegetarianMain);
    assert_eq!(identify_dish_type("Sienirisotto"), DishType::VegetarianMain);
}

#[test]
fn test_case_insensitive() {
    assert_eq!(identify_dish_type("LOHIKEITTO"), DishType::Soup);
    assert_eq!(identify_dish_type("NaUdAnLiHa"), DishType::MeatMain);
}

#[test]
fn test_default_is_vegetarian() {
    assert_eq!(identify_dish_type(""), DishType::VegetarianMain);
    assert_eq!(identify_dish_type("Pizza margherita"), DishType::VegetarianMain);
    assert_eq!(identify_dish_type("12345"), DishType::VegetarianMain);
}

#[test]
fn test_first_rule_wins() {
    // format beats protein
    assert_eq!(identify_dish_type("Lohikeitto"), DishType::Soup);
    assert_eq!(identify_dish_type("Broilerisalaatti"), DishType::Salad);
    assert_eq!(identify_dish_type("Kanapasta"), DishType::PastaDish);
    // soup beats casserole
    assert_eq!(identify_dish_type("Keitto ja laatikko"), DishType::Soup);
    // beef beats fish beats poultry
    assert_eq!(identify_dish_type("Beef and salmon"), DishType::MeatMain);
    assert_eq!(identify_dish_type("Kala ja kana"), DishType::FishMain);
    assert_eq!(identify_dish_type("Chicken with tofu"), DishType::PoultryMain);
}

#[test]
fn test_substring_matching_is_literal() {
    // "pihvi" is checked before "kasvi"
    assert_eq!(identify_dish_type("Kasvispihvi"), DishType::MeatMain);
    assert_eq!(identify_dish_type("Kanaliha"), DishType::PoultryMain);
}

#[test]
fn test_never_returns_unreachable_types() {
    for name in ["Pata", "Stew", "Grain bowl", "Buddha bowl", "Muhennos"] {
        let t = identify_dish_type(name);
        assert_ne!(t, DishType::Stew, "{}", name);
        assert_ne!(t, DishType::GrainBowl, "{}", name);
    }
}

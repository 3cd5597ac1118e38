use food_checkout::domain::cart::Cart;
use food_checkout::domain::money::Money;
use rand::Rng;
use rand::seq::SliceRandom;
use rust_decimal::Decimal;
use std::collections::HashMap;

const NAMES: [&str; 5] = ["Pizza", "Burger", "Salad", "Soup", "Tacos"];

fn random_price(rng: &mut impl Rng) -> Money {
    Money::new(Decimal::new(rng.gen_range(0..5000), 2))
}

#[test]
fn test_repeated_adds_sum_quantities_and_keep_first_price() {
    let mut rng = rand::thread_rng();

    for _ in 0..200 {
        let mut cart = Cart::new();
        let mut expected: HashMap<&str, (Money, u32)> = HashMap::new();

        for _ in 0..rng.gen_range(1..30) {
            let name = *NAMES.choose(&mut rng).unwrap();
            let price = random_price(&mut rng);
            let quantity = rng.gen_range(1..10);

            cart.add_item(name, price, quantity).unwrap();
            expected
                .entry(name)
                .and_modify(|(_, q)| *q += quantity)
                .or_insert((price, quantity));
        }

        assert_eq!(cart.len(), expected.len());
        for (name, (price, quantity)) in &expected {
            let item = cart.get(name).unwrap();
            assert_eq!(item.unit_price, *price);
            assert_eq!(item.quantity, *quantity);
        }
    }
}

#[test]
fn test_total_matches_line_items_after_additions_and_removals() {
    let mut rng = rand::thread_rng();

    for _ in 0..200 {
        let mut cart = Cart::new();
        let mut expected: HashMap<&str, (Money, u32)> = HashMap::new();

        for _ in 0..rng.gen_range(0..40) {
            let name = *NAMES.choose(&mut rng).unwrap();
            if rng.gen_bool(0.25) {
                cart.remove_item(name);
                expected.remove(name);
            } else {
                let price = random_price(&mut rng);
                let quantity = rng.gen_range(1..5);
                cart.add_item(name, price, quantity).unwrap();
                expected
                    .entry(name)
                    .and_modify(|(_, q)| *q += quantity)
                    .or_insert((price, quantity));
            }
        }

        let total = Money::checked_sum(
            expected
                .values()
                .map(|(price, q)| price.checked_mul(*q).unwrap()),
        )
        .unwrap();
        assert_eq!(cart.total().unwrap(), total);
        assert_eq!(cart.is_empty(), expected.is_empty());
    }
}

//! The built-in Sampaguita Minimart catalog.
//!
//! Base prices are the January 2024 shelf level in centavos. Two entries are
//! analytics fixtures: one dead-stock item that must never sell and one hero
//! item with boosted selection weight.

use sarisim_core::{Centavos, SimResult};

use crate::product::{Barcode, Brand, Category, Product};

fn entry(
    barcode: &str,
    name: &str,
    brand: &str,
    category: Category,
    retail: i64,
    cost: i64,
) -> SimResult<Product> {
    Product::new(
        Barcode::new(barcode)?,
        name,
        Brand::new(brand),
        category,
        Centavos::new(retail),
        Centavos::new(cost),
    )
}

/// Full product table. Validates every row, so the one call per binary keeps
/// the table honest.
pub fn products() -> SimResult<Vec<Product>> {
    use Category::*;

    Ok(vec![
        // Soda, individual bottles.
        entry("544900000099", "Coca-Cola Mismo 295ml", "Coca-Cola", Soda, 2000, 1800)?,
        entry("480198112005", "Sprite 500ml", "Coca-Cola", Soda, 2500, 2250)?,
        entry("480198112010", "Royal Tru Orange 500ml", "Coca-Cola", Soda, 2500, 2250)?,
        entry("480198112000", "Coke 500ml", "Coca-Cola", Soda, 2500, 2250)?,
        entry("480392525114", "Mountain Dew 500ml", "Pepsi", Soda, 2200, 2000)?,
        entry("480392525110", "Pepsi 500ml", "Pepsi", Soda, 2200, 2000)?,
        entry("480198111607", "Coke 1.5L", "Coca-Cola", Soda, 6000, 5400)?,
        entry("480198118062", "Sprite 1.5L", "Coca-Cola", Soda, 6000, 5400)?,
        entry("480191198062", "Royal Tru Orange 1.5L", "Coca-Cola", Soda, 6000, 5400)?,
        entry("480392515114", "Mountain Dew 1.5L", "Pepsi", Soda, 5500, 5000)?,
        entry("480392515110", "Pepsi 1.5L", "Pepsi", Soda, 5500, 5000)?,
        entry("480198111664", "Coke Zero 1.5L", "Coca-Cola", Soda, 6000, 5400)?,
        entry("480392515112", "7-up 1.5L", "Pepsi", Soda, 5500, 5000)?,
        entry("480198109722", "Royal Tru Strawberry 1.5L", "Coca-Cola", Soda, 6000, 5400)?,
        entry("480392515116", "Mirinda Orange 1.5L", "Pepsi", Soda, 6000, 5400)?,
        entry("480198111696", "Coke Light 1.5L", "Coca-Cola", Soda, 6500, 5850)?,
        // Case and bundle stock, vendor customers only.
        entry("480198112717", "Coke Swakto 195ml (1 Case)", "Coca-Cola", SoftdrinksCase, 12500, 11200)?.wholesale_only(),
        entry("480198112720", "Royal Swakto 195ml (1 Case)", "Coca-Cola", SoftdrinksCase, 12500, 11200)?.wholesale_only(),
        entry("480198102719", "Sprite Swakto 195ml (1 Case)", "Coca-Cola", SoftdrinksCase, 12500, 11200)?.wholesale_only(),
        entry("480392513032", "Mountain Dew 290ml (1 Case)", "Pepsi", SoftdrinksCase, 20000, 18000)?.wholesale_only(),
        entry("480374937310", "Coke 1L (1 Case)", "Coca-Cola", SoftdrinksCase, 35000, 31500)?.wholesale_only(),
        entry("480611352020", "Juicy Lemon 237ml (1 Bundle)", "Coca-Cola", SoftdrinksCase, 14100, 12700)?.wholesale_only(),
        entry("480732471900", "Sprite 1L (1 Case)", "Coca-Cola", SoftdrinksCase, 35000, 31500)?.wholesale_only(),
        entry("542353276241", "Royal 1L (1 Case)", "Coca-Cola", SoftdrinksCase, 35000, 31500)?.wholesale_only(),
        // Beverages, lifted by the summer seasonality bump.
        entry("955600121722", "Milo 22g Sachet", "Nestle", Beverages, 1200, 1050)?,
        entry("480036141081", "Nestle Bear Brand Fortified 33g", "Nestle", Beverages, 1150, 1000)?,
        entry("480864731007", "Tang Orange 250g", "Tang", Beverages, 21600, 19500)?,
        entry("965412919731", "Energen Cereal Milk Chocolate Drink 40g", "Energen", Beverages, 900, 800)?,
        entry("965412919613", "Energen Cereal Drink Mix Vanilla Hanger 40g", "Energen", Beverages, 860, 750)?,
        // Snacks.
        entry("489120804013", "Oishi Prawn Crackers 60g", "Oishi", Snack, 1760, 1550)?,
        entry("893921341445", "San Sky Flakes Crackers Original 25g x 10s", "M.Y. San", Snack, 5840, 5250)?,
        entry("893951811445", "Hansel Mocha Sandwich", "Rebisco", Snack, 6020, 5400)?,
        // Canned goods.
        entry("748485200019", "555 Sardines in Tomato Sauce 155g", "555", CannedGoods, 2500, 2200)?,
        entry("748485800035", "Argentina Corned Beef 260g", "Argentina", CannedGoods, 5750, 5200)?,
        entry("480002201028", "Hunts Pork & Beans 100g Doy", "Hunts", CannedGoods, 1450, 1300)?,
        // Dairy.
        entry("480057511015", "Alaska Classic Evaporated Filled Milk 140ml", "Alaska", Dairy, 2820, 2550)?,
        entry("480057513016", "Alaska Condensada Sweetened Condensed Creamer 168ml", "Alaska", Dairy, 3900, 3500)?,
        entry("480864702009", "Eden Cheese 165g", "Mondelez", Dairy, 7800, 7000)?,
        entry("480535824701", "Dari Creme Butter Milk 100g", "Dari Creme", Dairy, 4100, 3700)?,
        // Condiments.
        entry("000008586780", "Datu Puti Patis 1L", "Datu Puti", Condiments, 8085, 7300)?,
        entry("642611907726", "Ajinomoto Seasoning Mix 50g", "Ajinomoto", Condiments, 1300, 1150)?,
        // Personal care.
        entry("642647382226", "Sisters Night Plus Cottony Napkin", "Sisters", PersonalCare, 4450, 4000)?,
        entry("642321541122", "Sisters Overnight Dry", "Sisters", PersonalCare, 11700, 10500)?,
        entry("672329634182", "Whisper Cottony Soft Clean X-Long Overnight", "Whisper", PersonalCare, 12800, 11500)?,
        entry("480088814685", "Sunsilk Strong & Long 350ml", "Sunsilk", PersonalCare, 15000, 13500)?,
        // Household.
        entry("870021639476", "Downy Sunrise Fresh Fabric Conditioner Sachet 20ml", "Downy", Household, 700, 600)?,
        entry("480004784003", "Zonrox Original Bleach 250ml", "Zonrox", Household, 3800, 3400)?,
        entry("037000359562", "Ariel With a Touch of Downy Freshness Powder", "Ariel", Household, 66000, 59500)?,
        entry("490243086729", "Joy Dishwashing Liquid Lemon 475ml", "Joy", Household, 13400, 12000)?,
        entry("490243078997", "Joy Dishwashing Liquid Lemon Sachet 40ml", "Joy", Household, 1200, 1050)?,
        // Analytics fixtures: dead stock for dead-inventory insights, hero
        // item with 3x selection weight for fast-mover insights.
        entry("480004210014", "UFC Premium Banana Ketchup 320g", "UFC", DeadStock, 6500, 5800)?.never_sell(),
        entry("489310100015", "Lucky Me Pancit Canton with Kalamansi 60g", "Lucky Me", InstantNoodles, 1250, 1100)?.hero(3),
    ])
}

/// Brands that run manufacturer campaigns.
pub fn campaign_brands() -> Vec<Brand> {
    [
        "Coca-Cola",
        "Pepsi",
        "Nestle",
        "Oishi",
        "Alaska",
        "Ariel",
        "Joy",
        "555",
        "Lucky Me",
    ]
    .into_iter()
    .map(Brand::new)
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalog_assembles_with_52_products() {
        assert_eq!(products().unwrap().len(), 52);
    }

    #[test]
    fn barcodes_are_unique() {
        let items = products().unwrap();
        let distinct: HashSet<_> = items.iter().map(|p| p.barcode().clone()).collect();
        assert_eq!(distinct.len(), items.len());
    }

    #[test]
    fn exactly_one_dead_stock_and_one_hero_product() {
        let items = products().unwrap();

        let dead: Vec<_> = items.iter().filter(|p| p.is_never_sell()).collect();
        assert_eq!(dead.len(), 1);
        assert_eq!(dead[0].barcode().as_str(), "480004210014");
        assert_eq!(dead[0].category(), Category::DeadStock);

        let heroes: Vec<_> = items.iter().filter(|p| p.hero_weight() > 1).collect();
        assert_eq!(heroes.len(), 1);
        assert_eq!(heroes[0].barcode().as_str(), "489310100015");
        assert_eq!(heroes[0].hero_weight(), 3);
    }

    #[test]
    fn wholesale_stock_is_exactly_the_case_category() {
        let items = products().unwrap();
        for p in &items {
            assert_eq!(
                p.is_wholesale_only(),
                p.category() == Category::SoftdrinksCase,
                "wholesale flag mismatch on {}",
                p.barcode()
            );
        }
        assert_eq!(items.iter().filter(|p| p.is_wholesale_only()).count(), 8);
    }

    #[test]
    fn margins_are_positive_across_the_catalog() {
        for p in products().unwrap() {
            assert!(
                p.base_retail() > p.base_cost(),
                "{} sells below cost",
                p.barcode()
            );
        }
    }

    #[test]
    fn campaign_brands_all_have_catalog_products() {
        let items = products().unwrap();
        for brand in campaign_brands() {
            assert!(
                items.iter().any(|p| p.brand() == &brand),
                "campaign brand {brand} has no products"
            );
        }
    }
}

//! Supplier master records.

use core::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use sarisim_catalog::Category;

/// Sequential supplier identifier, assigned in directory order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SupplierId(pub u32);

impl fmt::Display for SupplierId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Supplier lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SupplierStatus {
    Active,
    Suspended,
}

impl SupplierStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            SupplierStatus::Active => "ACTIVE",
            SupplierStatus::Suspended => "SUSPENDED",
        }
    }
}

/// Contact block for a supplier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub person: String,
    pub number: String,
    pub email: String,
    pub address: String,
}

/// Wholesale distributor record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Supplier {
    pub id: SupplierId,
    pub name: String,
    pub contact: ContactInfo,
    pub notes: String,
    pub status: SupplierStatus,
    pub categories: Vec<Category>,
}

impl Supplier {
    pub fn supplies(&self, category: Category) -> bool {
        self.categories.contains(&category)
    }

    /// Invoice-style delivery reference: initials of the first three name
    /// words, the received date, and the batch id.
    pub fn reference(&self, date: NaiveDate, batch_id: u64) -> String {
        let prefix: String = self
            .name
            .split_whitespace()
            .take(3)
            .filter_map(|word| word.chars().next())
            .collect::<String>()
            .to_uppercase();
        format!("{prefix}-{}-{batch_id:04}", date.format("%Y%m%d"))
    }
}

/// The fifteen distributors the store orders from.
pub fn directory() -> Vec<Supplier> {
    use Category::*;

    let templates: [(&str, &str, &str, &str, &str, &[Category]); 15] = [
        (
            "San Miguel Corporation",
            "Juan dela Cruz",
            "+63 2 8632 2000",
            "orders@sanmiguel.com.ph",
            "40 San Miguel Avenue, Ortigas Center, Pasig City",
            &[Beverages, Soda, SoftdrinksCase],
        ),
        (
            "Coca-Cola Beverages Philippines",
            "Maria Santos",
            "+63 2 8884 2653",
            "sales@coca-cola.com.ph",
            "2286 Don Chino Roces Ave., Makati City",
            &[Soda, SoftdrinksCase, Beverages],
        ),
        (
            "Pepsi-Cola Products Philippines",
            "Roberto Reyes",
            "+63 2 8878 9000",
            "distribution@pepsi.com.ph",
            "Pepsi Building, Meralco Avenue, Pasig City",
            &[Soda, SoftdrinksCase, Beverages],
        ),
        (
            "Nestle Philippines Inc.",
            "Ana Garcia",
            "+63 2 8687 5000",
            "orders@nestle.com.ph",
            "Rockwell Business Center, Makati City",
            &[Beverages, Dairy, Snack],
        ),
        (
            "URC (Universal Robina Corporation)",
            "Miguel Torres",
            "+63 2 8633 7631",
            "sales@urc.com.ph",
            "110 E. Rodriguez Jr. Ave., Quezon City",
            &[Snack, Beverages, InstantNoodles],
        ),
        (
            "Monde Nissin Corporation",
            "Linda Bautista",
            "+63 2 8810 6001",
            "orders@mondenissin.com.ph",
            "Km 18 West Service Road, Paranaque City",
            &[InstantNoodles, Snack],
        ),
        (
            "Century Pacific Food Inc.",
            "Carlos Mendoza",
            "+63 2 8836 1580",
            "distribution@centurypacific.com.ph",
            "7th Floor, Centerpoint Building, Ortigas Center",
            &[CannedGoods, Dairy],
        ),
        (
            "Alaska Milk Corporation",
            "Teresa Villanueva",
            "+63 2 8867 8888",
            "sales@alaskamilk.com.ph",
            "4th Floor, Corinthian Plaza, Paseo de Roxas, Makati",
            &[Dairy, Beverages],
        ),
        (
            "Procter & Gamble Philippines",
            "Marco Gonzales",
            "+63 2 8838 0000",
            "orders@pg.com.ph",
            "19th Floor, Net One Center, BGC, Taguig",
            &[PersonalCare, Household],
        ),
        (
            "Unilever Philippines",
            "Diana Ramos",
            "+63 2 8892 0611",
            "supply@unilever.com.ph",
            "1351 United Nations Ave., Ermita, Manila",
            &[PersonalCare, Household, Condiments],
        ),
        (
            "NutriAsia Inc.",
            "Ramon Castillo",
            "+63 2 8571 2836",
            "sales@nutriasia.com.ph",
            "8th Floor, The Salcedo Towers, Makati",
            &[Condiments, CannedGoods],
        ),
        (
            "Rebisco Group of Companies",
            "Patricia Lim",
            "+63 2 8635 9901",
            "orders@rebisco.com.ph",
            "224 Quirino Highway, Novaliches, Quezon City",
            &[Snack],
        ),
        (
            "Oishi Snack Time",
            "Kevin Sy",
            "+63 2 8631 0101",
            "distribution@oishi.com.ph",
            "Liwasang Bonifacio, Tondo, Manila",
            &[Snack, Beverages],
        ),
        (
            "Del Monte Philippines Inc.",
            "Maricar Cruz",
            "+63 2 8895 0000",
            "orders@delmonte.com.ph",
            "JMT Corporate Condominium, Ortigas, Pasig",
            &[CannedGoods, Condiments],
        ),
        (
            "Philippine Seven Corp (7-Eleven Dist.)",
            "Joseph Tan",
            "+63 2 8856 0711",
            "supplier@7-eleven.com.ph",
            "7-Eleven Building, EDSA corner Connecticut, Mandaluyong",
            &[Snack, Beverages, PersonalCare],
        ),
    ];

    templates
        .into_iter()
        .enumerate()
        .map(|(idx, (name, person, number, email, address, categories))| {
            let leading: Vec<&str> = categories.iter().take(2).map(|c| c.as_str()).collect();
            Supplier {
                id: SupplierId(idx as u32 + 1),
                name: name.to_string(),
                contact: ContactInfo {
                    person: person.to_string(),
                    number: number.to_string(),
                    email: email.to_string(),
                    address: address.to_string(),
                },
                notes: format!("Primary distributor for {}", leading.join(", ")),
                status: SupplierStatus::Active,
                categories: categories.to_vec(),
            }
        })
        .collect()
}

//! Console report printed by the demo.

use crate::logger::LogRecord;
use crate::model::{Category, Product};

/// Prices are shown in reais with two decimals.
pub fn format_price(price: f64) -> String {
    format!("R$ {:.2}", price)
}

pub fn print_banner() {
    println!("📦 === SISTEMA DA PADARIA ===");
    println!("🚀 Inicializando sistema...");
}

pub fn print_section(title: &str) {
    println!("\n{}", title);
}

pub fn print_products(products: &[Product]) {
    if products.is_empty() {
        println!("  (nenhum produto)");
    }
    for product in products {
        println!("- {} - {}", product.name, format_price(product.price));
    }
}

pub fn print_categories(categories: &[Category]) {
    for category in categories {
        println!("- {}", category.name);
    }
}

pub fn print_menu() {
    println!("\n📦 === MENU DO SISTEMA ===");
    println!("1. Listar todos os produtos");
    println!("2. Listar todas as categorias");
    println!("3. Buscar produtos por categoria");
    println!("4. Criar novo produto");
    println!("5. Criar nova categoria");
    println!("6. Ver logs do sistema");
    println!("0. Sair");
    println!("==================================");
}

pub fn print_log_records(records: &[LogRecord]) {
    println!("\n📜 === LOGS DO SISTEMA ===");
    for record in records {
        match &record.context {
            Some(ctx) => println!(
                "[{}] {:<7} {} {}",
                record.timestamp.format("%Y-%m-%d %H:%M:%S"),
                record.level,
                record.message,
                ctx
            ),
            None => println!(
                "[{}] {:<7} {}",
                record.timestamp.format("%Y-%m-%d %H:%M:%S"),
                record.level,
                record.message
            ),
        }
    }
}

pub fn print_farewell() {
    println!("\n🎉 Obrigado por usar o Sistema da Padaria!");
}

//! Example walk-through of the Tapsilat client
//!
//! Runs the validators offline, then creates a handful of orders against the
//! API configured through `TAPSILAT_TOKEN` (and optionally
//! `TAPSILAT_ENDPOINT` / `TAPSILAT_TIMEOUT_SECS`).

use tapsilat::{
    validate_gsm_number, validate_installments, Order, OrderBasketItem, OrderBasketItemPayer,
    OrderBillingAddress, OrderBuyer, OrderCheckoutDesign, OrderShippingAddress, TapsilatClient,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    println!("=== Validation Examples ===");
    run_validation_examples();

    let client = match TapsilatClient::from_env() {
        Ok(client) => client,
        Err(e) => {
            println!("\nSkipping API scenarios: {}", e);
            return Ok(());
        }
    };
    println!("\nUsing endpoint {}", client.endpoint());

    let scenarios = [
        ("Basic Order", basic_order()),
        ("Order with Basket Items", order_with_basket_items()),
        ("Order with Addresses", order_with_addresses()),
        ("Order with Installments", order_with_installments()?),
        ("Order with Checkout Design", order_with_checkout_design()),
    ];

    for (title, order) in scenarios {
        println!("\n=== {} ===", title);
        match client.create_order(order).await {
            Ok(response) => {
                println!("Order ID: {}", response.order_id);
                println!("Reference ID: {}", response.reference_id);
                println!("Checkout URL: {}", response.checkout_url);
            }
            Err(e) => println!("Error creating order: {}", e),
        }
    }

    Ok(())
}

fn buyer() -> OrderBuyer {
    OrderBuyer::new("John", "Doe", "test@example.com").with_gsm_number("+90 555 123-45(67)")
}

fn basic_order() -> Order {
    Order::new(100.0, "TRY", "tr").with_buyer(buyer())
}

fn order_with_basket_items() -> Order {
    let item = |id: &str, name: &str, price: f64, quantity: u32, payer_ref: &str, kind: &str| {
        OrderBasketItem {
            quantity: Some(quantity),
            payer: Some(OrderBasketItemPayer {
                reference_id: payer_ref.to_string(),
                payer_type: kind.to_string(),
                ..Default::default()
            }),
            ..OrderBasketItem::new(id, name, price, "PHYSICAL")
        }
    };

    Order::new(30.49, "TRY", "tr")
        .with_buyer(buyer())
        .with_basket_item(item("B001", "Item 1", 10.0, 1, "payer_ref0_item1", "PERSONAL"))
        .with_basket_item(item("B002", "Item 2", 20.49, 2, "payer_ref1_item2", "BUSINESS"))
}

fn order_with_addresses() -> Order {
    let mut order = Order::new(25.0, "TRY", "tr").with_buyer(buyer());
    order.billing_address = OrderBillingAddress {
        address: "uskudar".to_string(),
        city: "Istanbul".to_string(),
        country: "TR".to_string(),
        contact_name: "John Doe".to_string(),
        zip_code: "34000".to_string(),
        ..Default::default()
    };
    order.shipping_address = OrderShippingAddress {
        address: "kadikoy".to_string(),
        city: "Istanbul".to_string(),
        country: "TR".to_string(),
        contact_name: "Jane Doe".to_string(),
        zip_code: "34001".to_string(),
        ..Default::default()
    };
    order
}

fn order_with_installments() -> tapsilat::Result<Order> {
    let mut order = Order::new(1200.0, "TRY", "tr")
        .with_buyer(buyer())
        .with_enabled_installments("2,3,6,9")?;
    order.payment_methods = true;
    order.payment_options = vec!["credit_card".to_string(), "cash".to_string()];
    order.payment_success_url = "https://example.com/success".to_string();
    order.payment_failure_url = "https://example.com/failure".to_string();
    Ok(order)
}

fn order_with_checkout_design() -> Order {
    let mut order = Order::new(55.0, "TRY", "tr").with_buyer(buyer());
    order.checkout_design = OrderCheckoutDesign {
        pay_button_color: "#FF0000".to_string(),
        logo: "http://example.com/logo.png".to_string(),
        input_background_color: "#EEEEEE".to_string(),
        input_text_color: "#333333".to_string(),
        right_background_color: "#FAFAFA".to_string(),
        ..Default::default()
    };
    order
}

fn run_validation_examples() {
    println!("GSM Number Validation Examples:");
    let gsm_numbers = [
        "+905551234567",
        "00905551234567",
        "05551234567",
        "5551234567",
        "+90 555 123-45(67)",
        "invalid_phone",
        "+90123",
    ];
    for gsm in gsm_numbers {
        match validate_gsm_number(gsm) {
            Ok(cleaned) => println!("  ✅ {} -> {}", gsm, cleaned),
            Err(e) => println!("  ❌ {} -> Error: {}", gsm, e.message),
        }
    }

    println!("\nInstallments Validation Examples:");
    let installment_lists = ["1,2,3,6", "1, 2, 3, 6", "2,4,8,12", "", "1,15,3", "1,abc,3"];
    for list in installment_lists {
        match validate_installments(list) {
            Ok(installments) => println!("  ✅ {:?} -> {:?}", list, installments),
            Err(e) => println!("  ❌ {:?} -> Error: {}", list, e.message),
        }
    }
}

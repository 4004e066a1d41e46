//! Cart -> canonical order text.

use litoral_cart::{Cart, CustomerInfo};

use crate::format::group_thousands;

const DIVIDER: &str = "------------------------------";

/// Presentation knobs for the compiled message.
///
/// The thousands separator defaults to the es-AR grouping the business has
/// always used; it is a configurable default rather than a constant because
/// whether the locale is a hard domain requirement is still an open product
/// question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageStyle {
    pub store_name: String,
    pub thousands_separator: char,
}

impl Default for MessageStyle {
    fn default() -> Self {
        Self {
            store_name: "Litoral Fishing".to_owned(),
            thousands_separator: '.',
        }
    }
}

/// Compile a cart and customer metadata into the canonical order message.
///
/// Deterministic: no IO, no clock, no randomness. Lines are emitted in the
/// cart's stored order; unpriced lines never show a price or subtotal and
/// never contribute to the estimated total. Lines are joined with `\n` and
/// there is no trailing newline.
pub fn compile(cart: &Cart, customer: &CustomerInfo, style: &MessageStyle) -> String {
    let sep = style.thousands_separator;
    let mut lines: Vec<String> = Vec::new();

    // Header
    lines.push(DIVIDER.to_owned());
    lines.push("  PEDIDO MAYORISTA".to_owned());
    lines.push(format!("  {}", style.store_name));
    lines.push(DIVIDER.to_owned());
    lines.push(String::new());

    // Customer info
    if !customer.name.is_empty() {
        lines.push(format!("Cliente: {}", customer.name));
    }
    if !customer.city.is_empty() {
        lines.push(format!("Ciudad: {}", customer.city));
    }
    if !customer.name.is_empty() || !customer.city.is_empty() {
        lines.push(String::new());
    }

    // Product list
    lines.push("PRODUCTOS:".to_owned());
    lines.push(String::new());

    for (i, line) in cart.lines().iter().enumerate() {
        lines.push(format!("{}. *{}*", i + 1, line.name));
        lines.push(format!("   Cod: {}", line.code));
        lines.push(format!("   Cant: {} un.", line.quantity));
        if let Some(price) = line.price {
            lines.push(format!("   Precio: ${} c/u", group_thousands(price, sep)));
            let subtotal = line.subtotal().unwrap_or(0);
            lines.push(format!("   Subtotal: ${}", group_thousands(subtotal, sep)));
        }
        lines.push(String::new());
    }

    lines.push(DIVIDER.to_owned());

    // Summary
    lines.push(format!("Productos: {}", cart.len()));
    lines.push(format!("Unidades: {}", cart.total_units()));
    if let Some(total) = cart.estimated_total() {
        lines.push(format!(
            "*TOTAL ESTIMADO: ${}*",
            group_thousands(total, sep)
        ));
    }

    lines.push(DIVIDER.to_owned());

    // Notes
    if !customer.notes.is_empty() {
        lines.push(String::new());
        lines.push(format!("Notas: {}", customer.notes));
    }

    lines.push(String::new());
    lines.push(format!(
        "_Enviado desde el catalogo online de {}_",
        style.store_name
    ));

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use litoral_cart::CartLineInput;
    use litoral_core::ProductId;

    fn input(id: &str, name: &str, code: &str, price: Option<u64>) -> CartLineInput {
        CartLineInput {
            product_id: ProductId::new(id),
            name: name.to_owned(),
            code: code.to_owned(),
            price,
            image: None,
        }
    }

    #[test]
    fn empty_cart_compiles_to_zero_counts_and_no_total_line() {
        let out = compile(&Cart::new(), &CustomerInfo::default(), &MessageStyle::default());

        assert!(out.contains("Productos: 0"));
        assert!(out.contains("Unidades: 0"));
        assert!(!out.contains("TOTAL ESTIMADO"));
        assert!(!out.contains("Cliente:"));
        assert!(!out.contains("Ciudad:"));
        assert!(!out.contains("Notas:"));
        assert!(out.starts_with(DIVIDER));
        assert!(!out.ends_with('\n'));
    }

    #[test]
    fn empty_cart_golden_message() {
        let out = compile(&Cart::new(), &CustomerInfo::default(), &MessageStyle::default());
        let expected = "\
------------------------------
  PEDIDO MAYORISTA
  Litoral Fishing
------------------------------

PRODUCTOS:

------------------------------
Productos: 0
Unidades: 0
------------------------------

_Enviado desde el catalogo online de Litoral Fishing_";
        assert_eq!(out, expected);
    }

    #[test]
    fn unpriced_line_has_no_price_lines_and_no_total_contribution() {
        let mut cart = Cart::new();
        cart.add_line(input("a", "Caña", "P1", Some(1_000)), 2);
        cart.add_line(input("b", "Reel", "P2", None), 3);

        let out = compile(&cart, &CustomerInfo::default(), &MessageStyle::default());

        assert!(out.contains("Productos: 2"));
        assert!(out.contains("Unidades: 5"));
        assert!(out.contains("*TOTAL ESTIMADO: $2.000*"));
        // Exactly one priced entry.
        assert_eq!(out.matches("Precio:").count(), 1);
        assert_eq!(out.matches("Subtotal:").count(), 1);
    }

    #[test]
    fn cart_with_no_priced_lines_omits_the_total_entirely() {
        let mut cart = Cart::new();
        cart.add_line(input("b", "Reel", "P2", None), 3);

        let out = compile(&cart, &CustomerInfo::default(), &MessageStyle::default());
        assert!(!out.contains("TOTAL ESTIMADO"));
    }

    #[test]
    fn customer_block_emits_only_present_fields() {
        let customer = CustomerInfo {
            name: String::new(),
            city: "Posadas".to_owned(),
            notes: String::new(),
        };
        let out = compile(&Cart::new(), &customer, &MessageStyle::default());

        assert!(!out.contains("Cliente:"));
        assert!(out.contains("Ciudad: Posadas\n\n"));
    }

    #[test]
    fn notes_block_is_preceded_by_a_blank_line() {
        let customer = CustomerInfo {
            notes: "Retiro el viernes".to_owned(),
            ..CustomerInfo::default()
        };
        let out = compile(&Cart::new(), &customer, &MessageStyle::default());
        assert!(out.contains("------------------------------\n\nNotas: Retiro el viernes"));
    }

    #[test]
    fn style_overrides_store_name_and_separator() {
        let mut cart = Cart::new();
        cart.add_line(input("a", "Caña", "P1", Some(28_500)), 1);
        let style = MessageStyle {
            store_name: "Casa Norte".to_owned(),
            thousands_separator: ',',
        };
        let out = compile(&cart, &CustomerInfo::default(), &style);

        assert!(out.contains("  Casa Norte"));
        assert!(out.contains("Precio: $28,500 c/u"));
        assert!(out.contains("_Enviado desde el catalogo online de Casa Norte_"));
    }

    #[test]
    fn lines_keep_stored_order_with_one_based_ordinals() {
        let mut cart = Cart::new();
        cart.add_line(input("b", "Reel", "P2", None), 1);
        cart.add_line(input("a", "Caña", "P1", None), 1);

        let out = compile(&cart, &CustomerInfo::default(), &MessageStyle::default());
        let reel = out.find("1. *Reel*").expect("first entry");
        let cana = out.find("2. *Caña*").expect("second entry");
        assert!(reel < cana);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn arb_cart() -> impl Strategy<Value = Cart> {
            proptest::collection::vec(
                (
                    "[a-z0-9]{1,12}",
                    "[A-Za-zÁÉÍÓÚáéíóúñ][A-Za-z0-9 ]{0,24}",
                    "[A-Z]{1,3}-[0-9]{1,4}",
                    proptest::option::of(0u64..10_000_000),
                    1u32..10_000,
                ),
                0..12,
            )
            .prop_map(|entries| {
                let mut cart = Cart::new();
                for (id, name, code, price, qty) in entries {
                    cart.add_line(
                        CartLineInput {
                            product_id: ProductId::new(id),
                            name,
                            code,
                            price,
                            image: None,
                        },
                        qty,
                    );
                }
                cart
            })
        }

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 1000,
                ..ProptestConfig::default()
            })]

            /// Property: compile is deterministic — identical inputs give
            /// byte-identical output.
            #[test]
            fn compile_is_deterministic(cart in arb_cart(), name in "[A-Za-z ]{0,20}", city in "[A-Za-z ]{0,20}") {
                let customer = CustomerInfo { name, city, notes: String::new() };
                let style = MessageStyle::default();

                let first = compile(&cart, &customer, &style);
                let second = compile(&cart, &customer, &style);
                prop_assert_eq!(first, second);
            }

            /// Property: summary counts always reflect the cart, and the
            /// total line appears iff some line is priced.
            #[test]
            fn summary_counts_match_cart(cart in arb_cart()) {
                let out = compile(&cart, &CustomerInfo::default(), &MessageStyle::default());

                let productos_line = format!("Productos: {}", cart.len());
                let unidades_line = format!("Unidades: {}", cart.total_units());
                prop_assert!(out.contains(&productos_line));
                prop_assert!(out.contains(&unidades_line));
                prop_assert_eq!(
                    out.contains("TOTAL ESTIMADO"),
                    cart.estimated_total().is_some()
                );
            }
        }
    }
}

// ============================================================================
// Basic Usage Example
// ============================================================================

use rust_decimal::Decimal;
use scaled_decimal::prelude::*;

fn main() -> Result<(), NumericError> {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    println!("=== Scaled Decimal Example ===\n");

    // Raw on-chain balances with their token decimals
    let usdc = ScaledDecimal::from_value(1_250_500_000u64, Some(6))?;
    let weth = ScaledDecimal::from_value("2750000000000000000", Some(18))?;
    println!("USDC balance: {}", usdc);
    println!("WETH balance: {}", weth);

    // Human input is parsed with truncation, never rounding
    let price = to_fp("3120.456789", 6)?;
    println!("\nWETH price:   {}", price);

    // Fixed-point multiply composes scales (18 + 6), then cut back to 6
    let value = weth
        .mul(&price)?
        .scale_down(6, RoundingPolicy::Down)?;
    println!("WETH value:   {}", value);

    let total = value.add(&usdc);
    println!("Portfolio:    {}", total);

    // Rates and percentages
    let share = usdc.div(&total)?;
    println!("\nUSDC share:   {}", share);

    let fee = total.percent(Decimal::new(30, 2));
    println!("0.30% fee:    {}", fee);

    // Display with two visible decimals
    let config = DecimalConfig::default().with_display_decimals(Some(2));
    println!("\nPortfolio (2dp): {}", total.display(&config));

    // Caps
    let cap = to_fp("5000", 0)?;
    println!("Capped:          {}", min(&total, &cap));
    println!("Max uint256:     {}", max_uint256());

    // Rounding policies side by side
    println!("\n=== Rounding 1.239 to 2 decimals ===");
    let x = to_fp("1.239", 3)?;
    for policy in RoundingPolicy::ALL {
        println!("  {:?}: {}", policy, x.scale_down(2, policy)?);
    }

    Ok(())
}

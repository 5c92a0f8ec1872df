//! Simple example walking through the six arithmetic operations

use arith::{Calculator, Operation};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let calc = Calculator::new();

    println!("Binary operations:");
    println!("   2 + 3 = {}", calc.add(2.0, 3.0));
    println!("   5 - 3 = {}", calc.subtract(5.0, 3.0));
    println!("   2 * 3 = {}", calc.multiply(2.0, 3.0));
    println!("   6 / 2 = {}", calc.divide(6.0, 2.0)?);
    println!("   2 ^ 10 = {}", calc.power(2.0, 10.0));

    println!("\nUnary operations:");
    println!("   sqrt(2) = {}", calc.square_root(2.0)?);

    println!("\nInvalid-domain inputs report errors:");
    match calc.divide(10.0, 0.0) {
        Ok(value) => println!("   10 / 0 = {value}"),
        Err(e) => println!("   10 / 0 → {e}"),
    }
    match calc.square_root(-1.0) {
        Ok(value) => println!("   sqrt(-1) = {value}"),
        Err(e) => println!("   sqrt(-1) → {e}"),
    }

    println!("\nSlice-based dispatch:");
    let requests = [
        ("+", vec![2.0, 3.0]),
        ("^", vec![2.0, 8.0]),
        ("sqrt", vec![81.0]),
    ];

    for (symbol, operands) in &requests {
        let operation = Operation::parse(symbol)?;
        let result = calc.evaluate(operation, operands)?;
        println!("   {operation} {operands:?} → {result}");
    }

    Ok(())
}

use incr::{Increment, Overflow};

/// A three-digit odometer built from a `u8` per wheel that rolls over past 9.
fn tick(wheels: &mut [u8; 3]) {
    for wheel in wheels.iter_mut().rev() {
        *wheel = wheel.wrapping_incr() % 10;
        if *wheel != 0 {
            return;
        }
    }
}

fn main() {
    let mut wheels = [9, 9, 7];
    for _ in 0..4 {
        tick(&mut wheels);
        println!("{}{}{}", wheels[0], wheels[1], wheels[2]);
    }

    // A byte counter that must not silently wrap.
    let count = 254u8;
    for policy in Overflow::ALL {
        match count.incr_n(2, policy) {
            Ok(value) => println!("{policy}: {count} + 2 = {value}"),
            Err(e) => println!("{policy}: {e}"),
        }
    }
}

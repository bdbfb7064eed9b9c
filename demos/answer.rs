use incr::incr;

fn main() {
    println!("incr(41) = {}", incr(41));
    println!("incr(incr(40)) = {}", incr(incr(40)));
}

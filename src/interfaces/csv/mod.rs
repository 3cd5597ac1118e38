pub mod cart_reader;
pub mod menu_reader;
pub mod order_writer;
pub mod restaurant_writer;

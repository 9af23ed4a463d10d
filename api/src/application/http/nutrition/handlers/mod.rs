pub mod search_foods;

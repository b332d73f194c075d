pub mod alphabet_table;

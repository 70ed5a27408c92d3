pub mod btree_map;

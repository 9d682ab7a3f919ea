mod tile_names_tests;

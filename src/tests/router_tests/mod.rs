mod rentals_tests;

mod wizard_tests;

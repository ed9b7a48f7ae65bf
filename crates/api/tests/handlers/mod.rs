mod slot_test;

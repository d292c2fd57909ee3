mod report_serialization_tests;

mod arg_tokens_tests;

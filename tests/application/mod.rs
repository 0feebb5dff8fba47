mod pipeline_test;
mod prompts_test;

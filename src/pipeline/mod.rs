// Aggregation pipeline: reviews in, one SentimentReport out.

pub mod aggregate;

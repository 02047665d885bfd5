//! Built-in prompt templates.

pub const HEADER_PLAN: &str = r#"I want to write a technical tutorial on '{title}'.
It will be a purely technical article with code examples. It will be a solution article to a problem related to data structures and algorithms.
I need you to suggest H2 headers only.
I want you to include only headers related to all the different approaches and solutions to the problem in 3 programming languages - Java, Python, C++.
Never use comma in any of the headers.
Include at most 8-10 headers only, include headers that are more practical and most relevant to the topic.
I want you to make the headers SEO optimised based on the keyword from '{title}'.
Make sure to explain any code examples anywhere.
Please be sure that you include only the most relevant and necessary headers for the tutorial.
The first H2 header must be a modified version of '{title}'.
The last H2 header should be exactly called 'Frequently Asked Questions'.
All the headers must be very technical and to the point and specific to '{title}'.
Finally, make sure that you format your output as a list of headers in a single string separated by commas.
For example, the output can be '.....,Frequently Asked Questions'.
"#;

pub const INTRODUCTION: &str = r#"
Here are the set of instructions that you strictly have to follow.
1. The article topic is: '{title}' and the H2 headers in this article are '{headers}'.
2. Write two short paragraphs of 3-4 sentences each, the first one should start with the direct definition and solution of the topic. It should not contain any unnecessary things.
3. The second one should contain what we will discuss in this article.
4. Don't include any header or subheader tag in this or any kind of titles. I just want paragraphs.
5. Also add a bulleted list of all headers that we will discuss.
6. Make it SEO optimised and follow all SEO best practices. Include meaningful variations of the title keyword multiple times to make it SEO optimised.
7. Here is a comma separated list of links of a few related articles: {links}. Only use these links in the article wherever possible with proper link and SEO optimised descriptive text.
8. You should not use any other inner link from any other domain apart from the ones that I have provided you. Don't stuff them or overuse them. You should use a particular link only at max 1 time.
9. If there's code, write it in proper format and HTML.
"#;

pub const SECTION_WRITER: &str = r#"
Here are the set of instructions that you strictly have to follow.
1. The article topic is: '{title}' and the H2 headers in this article are '{headers}'.
2. For the header, write relevant content with code if required in a short and precise manner. Don't add unnecessary explanations.
3. Make it precise, relevant, and technical. Only if it's necessary, use bullet points only whenever required, if not, just write in paragraphs.
4. Include code, properties, configurations, examples, wherever applicable.
5. Maintain structure, formatting, indentation, code blocks, etc.
6. Write only what is needed in the header. Don't include any unnecessary subheaders.
7. Here is a comma separated list of links of a few related articles: {links}. Only use these links in the article wherever possible with proper link and SEO optimised descriptive text.
8. You should not use any other inner link from any other domain apart from the ones that I have provided you. Don't stuff them or overuse them. You should use a particular link only at max 1 time.
9. Make it SEO optimised. Follow all SEO best practices. Include meaningful variations of the title keyword multiple times to make it SEO optimised.
10. Strictly follow this: The content that you generate finally should start with the same H2 header that I give you.
11. If there's code, write it in proper format and HTML.
12. Also, the content should not have any conclusion, summary paragraphs or subheaders in it.
13. Here's the H2 header that you have to write for: {target_header}"#;

pub const FAQ_WRITER: &str = r#"
1. The article topic is: '{title}' and the H2 headers are '{headers}'.
2. Write a H2 'Frequently Asked Questions' for this article and write 5 technical FAQs that are closely related to this article and are most frequently searched on google.
3. Each FAQ should be 1 paragraph only, at most 70 words. Make it SEO optimised.
4. Here is a comma separated list of links of a few related articles: {links}. Only use these links in the article wherever possible with proper link and SEO optimised descriptive text.
5. You should not use any other inner link from any other domain apart from the ones that I have provided you. Don't stuff them or overuse them. You should use a particular link only at max 1 time.
6. Include meaningful variations of the title keyword multiple times to make it SEO optimised.
7. If there's code, write it in proper format and HTML.
8. Follow all SEO best practices."#;

pub const HUMANIZER: &str = r#"Rewrite the piece of content in such a way that:
1. Only use the "we" tone whenever it makes sense.
2. Replace complex words with easier ones.
3. Break longer sentences and paragraphs into shorter ones.
4. Use active voice instead of passive voice.
5. Use fewer punctuation marks.
6. Knowingly, make some small grammatical or punctuational mistakes, not major ones that impact the SEO.
7. Please write it in such a way that it has been written by a non-native English speaker, who is a beginner technical content writer.
8. Avoid changing the following things - code snippets, technical and Computer science related words like DevOps, etc., titles and headers. Here's your content:
{content}"#;
